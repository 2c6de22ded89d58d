//! Headless battle simulator entry point.
mod config;
mod headless;
mod sim;

use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_content::{ContentFactory, bundled_snapshot};
use battle_core::{ActorId, TroopId};
use clap::Parser;
use config::SimConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "battle-sim")]
#[command(about = "Run a turn-based battle with scripted party input")]
struct Args {
    /// Troop id to fight (1-based)
    #[arg(default_value_t = 1)]
    troop: u32,

    /// Directory with troops.ron, enemies.ron, skills.ron, actors.ron and system.toml
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Base seed for enemy choices and targets
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many ticks
    #[arg(long)]
    max_ticks: Option<u32>,

    /// Run the battle-test encounter from system settings
    #[arg(long)]
    test: bool,

    /// Party members by actor id
    #[arg(long, value_delimiter = ',', default_value = "1,2")]
    member: Vec<u32>,

    /// Let every party member attack automatically
    #[arg(long)]
    auto: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut config = SimConfig::from_env();
    if let Some(dir) = args.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(ticks) = args.max_ticks {
        config.max_ticks = ticks.max(1);
    }
    config.battle_test |= args.test;

    let data = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir)
            .load_snapshot()
            .with_context(|| format!("failed to load battle data from {}", dir.display()))?,
        None => bundled_snapshot().context("bundled battle data is invalid")?,
    };

    let roster: Vec<ActorId> = args.member.into_iter().map(ActorId).collect();
    let report = sim::run(&data, &config, TroopId(args.troop), &roster, args.auto)?;

    println!(
        "{} after {} turn(s) in {} tick(s)",
        report.result, report.turns, report.ticks
    );
    Ok(())
}
