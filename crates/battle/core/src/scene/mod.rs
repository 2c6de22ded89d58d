//! The battle scene: state machine driving one encounter from start to
//! outcome.
//!
//! Each [`BattleScene::update`] call is one tick. The order within a tick is
//! fixed: windows update, then (unless a modal message is visible) one
//! resolution step, then (unless a message is pending) one input step, then
//! background sync, event update and screen effects.
mod error;
mod flow;
mod phase;
pub mod ports;

pub use error::SceneError;
pub use phase::{BattlePhase, BattleResult};
pub use ports::{
    Background, BattleServices, BattleUi, CommandSource, EffectResolver, EncounterEvents,
    PartyOption, PlayerCommand, Presentation,
};

use crate::config::BattleConfig;
use crate::engine::{Decision, EnemyDecisionEngine};
use crate::env::{BattleEnv, EnemyActionDefinition};
use crate::state::{ActorId, BattleContext, BattlerId, BattlerOrigin, TerrainId, TroopId};

/// Result of [`BattleScene::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// The troop id was out of range. The scene recorded a victory and asked
    /// to exit without building any battle state.
    Aborted { troop_id: TroopId },
}

pub struct BattleScene<'a> {
    env: BattleEnv<'a>,
    services: BattleServices,
    config: BattleConfig,

    // encounter setup supplied by the caller
    roster: Vec<ActorId>,
    terrain: Option<TerrainId>,
    background_override: Option<String>,

    context: Option<BattleContext>,
    background: Option<Background>,
    /// Background name last adopted from the context.
    shown_background: String,

    phase: BattlePhase,
    cycle: u32,
    auto_battle: bool,
    active_actor: Option<BattlerId>,
    result: Option<BattleResult>,
    exit_requested: bool,
}

impl<'a> BattleScene<'a> {
    pub fn new(env: BattleEnv<'a>, services: BattleServices, config: BattleConfig) -> Self {
        Self {
            env,
            services,
            config,
            roster: Vec::new(),
            terrain: None,
            background_override: None,
            context: None,
            background: None,
            shown_background: String::new(),
            phase: BattlePhase::Start,
            cycle: 0,
            auto_battle: false,
            active_actor: None,
            result: None,
            exit_requested: false,
        }
    }

    /// Party members fielded outside battle-test mode.
    pub fn with_roster(mut self, roster: impl IntoIterator<Item = ActorId>) -> Self {
        self.roster = roster.into_iter().collect();
        self
    }

    /// Terrain the encounter happens on. Defaults to the system terrain.
    pub fn with_terrain(mut self, terrain: TerrainId) -> Self {
        self.terrain = Some(terrain);
        self
    }

    /// Named background that overrides the terrain default.
    pub fn with_background(mut self, name: impl Into<String>) -> Self {
        self.background_override = Some(name.into());
        self
    }

    // ===== lifecycle =====

    /// Sets up the encounter for `troop_id`.
    ///
    /// In battle-test mode the configured test troop replaces `troop_id`
    /// before it is validated. An id outside `1..=troop_count` aborts the
    /// battle as a victory.
    ///
    /// # Errors
    ///
    /// Fails when a required oracle is missing or a troop member or party
    /// member has no template. Any previous battle is released first, so a
    /// failed start leaves the scene without a context or result.
    pub fn start(
        &mut self,
        troop_id: TroopId,
        battle_test: bool,
    ) -> Result<StartOutcome, SceneError> {
        self.context = None;
        self.result = None;
        self.exit_requested = false;

        let troop_id = if battle_test {
            self.env.system()?.battle_test.troop
        } else {
            troop_id
        };

        let troops = self.env.troops()?;
        let troop = match troop_id.index() {
            Some(index) if index < troops.troop_count() => troops.troop(troop_id),
            _ => None,
        };
        let Some(troop) = troop else {
            tracing::warn!(
                troop = %troop_id,
                troop_count = troops.troop_count(),
                "invalid monster party id"
            );
            self.result = Some(BattleResult::Victory);
            self.exit_requested = true;
            return Ok(StartOutcome::Aborted { troop_id });
        };

        let system = self.env.system()?;
        let (members, background_name) = if battle_test {
            (
                system.battle_test.members.clone(),
                system.battle_test.background.clone(),
            )
        } else {
            (
                self.roster.clone(),
                self.background_override.clone().unwrap_or_default(),
            )
        };

        let mut ctx = BattleContext::new(troop_id, self.config.seed);
        let actors = self.env.actors()?;
        for actor in members {
            let template = actors.actor(actor).ok_or(SceneError::MissingActor(actor))?;
            if ctx
                .spawn(template.name.clone(), BattlerOrigin::Actor(actor), template.max_hp)
                .is_none()
            {
                tracing::warn!(%actor, "party is full; member left out");
            }
        }
        let enemies = self.env.enemies()?;
        for &enemy in &troop.members {
            let template = enemies.enemy(enemy).ok_or(SceneError::MissingEnemy(enemy))?;
            if ctx
                .spawn(template.name.clone(), BattlerOrigin::Enemy(enemy), template.max_hp)
                .is_none()
            {
                tracing::warn!(%enemy, "troop is full; member left out");
            }
        }
        ctx.set_background_name(background_name.clone());

        self.cycle = 0;
        self.auto_battle = false;
        self.active_actor = None;

        self.services.ui.open(&ctx);
        self.services.presentation.reset_map_bgm();
        self.services.presentation.play_bgm(&system.battle_music);
        self.services.presentation.play_se(&system.battle_se);

        let background = if background_name.is_empty() {
            Background::Terrain(self.terrain.unwrap_or(system.default_terrain))
        } else {
            Background::Named(background_name.clone())
        };
        self.services.presentation.show_background(&background);
        self.background = Some(background);
        self.shown_background = background_name;

        tracing::info!(
            troop = %troop_id,
            name = %troop.name,
            party = ctx.party().members().len(),
            enemies = ctx.troop().members().len(),
            battle_test,
            "battle started"
        );
        self.context = Some(ctx);
        // Set directly so a restarted scene reports `Start` again.
        self.phase = BattlePhase::Start;
        self.services.ui.on_phase_changed(BattlePhase::Start);

        Ok(StartOutcome::Started)
    }

    /// Runs one tick.
    ///
    /// A scene that already requested exit ignores further ticks.
    pub fn update(&mut self) -> Result<(), SceneError> {
        if self.exit_requested {
            return Ok(());
        }
        let mut ctx = self.context.take().ok_or(SceneError::NotStarted)?;
        let result = self.tick(&mut ctx);
        self.context = Some(ctx);
        result
    }

    fn tick(&mut self, ctx: &mut BattleContext) -> Result<(), SceneError> {
        self.cycle += 1;
        self.services.ui.update();

        if !self.services.ui.is_message_visible() {
            self.process_actions(ctx)?;
        }
        if !self.services.ui.is_message_pending() {
            self.process_input(ctx)?;
        }

        self.sync_background(ctx);
        self.services.events.update(ctx);
        self.services.presentation.update_screen();
        Ok(())
    }

    /// Ends the current turn: clears auto-battle, advances the turn counter
    /// and runs turn-boundary events.
    pub fn next_turn(&mut self) -> Result<u32, SceneError> {
        let mut ctx = self.context.take().ok_or(SceneError::NotStarted)?;
        let turn = self.advance_turn(&mut ctx);
        self.context = Some(ctx);
        Ok(turn)
    }

    fn advance_turn(&mut self, ctx: &mut BattleContext) -> u32 {
        self.auto_battle = false;
        let turn = ctx.advance_turn();
        self.services.events.process_turn(turn, ctx);
        tracing::info!(turn, "next turn");
        turn
    }

    /// Decides `def` for `enemy` and applies the phase change it requests.
    pub fn create_enemy_action(
        &mut self,
        enemy: BattlerId,
        def: &EnemyActionDefinition,
    ) -> Result<Decision, SceneError> {
        let mut ctx = self.context.take().ok_or(SceneError::NotStarted)?;
        let result = self.decide(&mut ctx, enemy, def);
        self.context = Some(ctx);
        result
    }

    fn decide(
        &mut self,
        ctx: &mut BattleContext,
        enemy: BattlerId,
        def: &EnemyActionDefinition,
    ) -> Result<Decision, SceneError> {
        let engine = EnemyDecisionEngine::new(self.env);
        let decision =
            engine.create_enemy_action(ctx, enemy, def, self.services.ui.selected_skill())?;
        if let Decision::Assigned {
            next_phase: Some(phase),
            ..
        } = decision
        {
            self.set_phase(phase);
        }
        Ok(decision)
    }

    /// Lets every living enemy pick and decide an action for this round.
    fn decide_enemy_actions(
        &mut self,
        ctx: &mut BattleContext,
    ) -> Result<(), SceneError> {
        let engine = EnemyDecisionEngine::new(self.env);
        let enemies: Vec<BattlerId> = ctx.troop().living(ctx.battlers()).collect();
        for enemy in enemies {
            match engine.choose_action(ctx, enemy)? {
                Some(def) => {
                    self.decide(ctx, enemy, &def)?;
                }
                None => tracing::debug!(%enemy, "enemy has no actions"),
            }
        }
        Ok(())
    }

    pub fn set_phase(&mut self, phase: BattlePhase) {
        if self.phase == phase {
            return;
        }
        tracing::debug!(from = %self.phase, to = %phase, "phase changed");
        self.phase = phase;

        if let Some(result) = phase.result() {
            self.result = Some(result);
            self.exit_requested = true;
            tracing::info!(%result, "battle finished");
        }
        self.services.ui.on_phase_changed(phase);
    }

    fn sync_background(&mut self, ctx: &BattleContext) {
        if ctx.background_name() == self.shown_background {
            return;
        }
        self.shown_background = ctx.background_name().to_owned();
        if !self.shown_background.is_empty() {
            let background = Background::Named(self.shown_background.clone());
            self.services.presentation.show_background(&background);
            self.background = Some(background);
        }
    }

    // ===== accessors =====

    pub fn env(&self) -> &BattleEnv<'a> {
        &self.env
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Ticks since the last `start`.
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn is_auto_battle(&self) -> bool {
        self.auto_battle
    }

    pub fn active_actor(&self) -> Option<BattlerId> {
        self.active_actor
    }

    pub fn result(&self) -> Option<BattleResult> {
        self.result
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn context(&self) -> Option<&BattleContext> {
        self.context.as_ref()
    }

    pub fn context_mut(&mut self) -> Option<&mut BattleContext> {
        self.context.as_mut()
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn services(&self) -> &BattleServices {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut BattleServices {
        &mut self.services
    }
}

impl Drop for BattleScene<'_> {
    fn drop(&mut self) {
        if let Some(ctx) = self.context.take() {
            tracing::debug!(troop = %ctx.troop_id(), turn = ctx.turn(), "battle context released");
        }
    }
}

impl std::fmt::Debug for BattleScene<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleScene")
            .field("phase", &self.phase)
            .field("cycle", &self.cycle)
            .field("auto_battle", &self.auto_battle)
            .field("active_actor", &self.active_actor)
            .field("result", &self.result)
            .field("exit_requested", &self.exit_requested)
            .finish_non_exhaustive()
    }
}
