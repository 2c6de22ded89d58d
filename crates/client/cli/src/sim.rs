//! Drives one battle scene to completion without a frontend.

use anyhow::{Context, Result};
use battle_core::{
    ActorId, BattleConfig, BattleEnv, BattleResult, BattleScene, BattleServices, DataSnapshot,
    PcgRng, StartOutcome, TroopId,
};

use crate::config::SimConfig;
use crate::headless::{AutoCommands, DemoResolver, HeadlessUi, LogPresentation, TurnLogEvents};

/// Summary of a finished simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimReport {
    pub result: BattleResult,
    pub ticks: u32,
    pub turns: u32,
}

/// Runs a battle against `troop` with the given party roster.
///
/// Fails when the scene cannot start or the battle is still running after
/// `config.max_ticks` ticks.
pub fn run(
    data: &DataSnapshot,
    config: &SimConfig,
    troop: TroopId,
    roster: &[ActorId],
    auto_battle: bool,
) -> Result<SimReport> {
    let services = BattleServices::new(
        Box::new(HeadlessUi::new(config.message_ticks)),
        Box::<LogPresentation>::default(),
        Box::<DemoResolver>::default(),
        Box::new(TurnLogEvents),
        Box::new(AutoCommands::new(auto_battle)),
    );
    let mut scene = BattleScene::new(
        BattleEnv::from_snapshot(data, &PcgRng),
        services,
        BattleConfig::with_seed(config.seed),
    )
    .with_roster(roster.iter().copied());

    let outcome = scene
        .start(troop, config.battle_test)
        .with_context(|| format!("failed to start battle against {troop}"))?;
    if let StartOutcome::Aborted { troop_id } = outcome {
        tracing::warn!(%troop_id, "battle aborted before it began");
    }

    let mut ticks = 0;
    while !scene.exit_requested() {
        if ticks >= config.max_ticks {
            anyhow::bail!("battle still running after {} ticks", config.max_ticks);
        }
        scene.update().context("battle tick failed")?;
        ticks += 1;
    }

    let result = scene
        .result()
        .context("scene exited without recording a result")?;
    let turns = scene.context().map_or(0, |ctx| ctx.turn());
    Ok(SimReport {
        result,
        ticks,
        turns,
    })
}
