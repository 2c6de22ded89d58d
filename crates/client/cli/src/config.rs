//! Simulator configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Runtime knobs for the headless simulator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Directory with battle data files; `None` uses the bundled demo data.
    pub data_dir: Option<PathBuf>,
    pub seed: u64,
    /// Upper bound on scene ticks before the run is abandoned.
    pub max_ticks: u32,
    pub battle_test: bool,
    /// Ticks a battle message stays on screen.
    pub message_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed: battle_core::BattleConfig::DEFAULT_SEED,
            max_ticks: 10_000,
            battle_test: false,
            message_ticks: 2,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Data directory (default: bundled demo data)
    /// - `BATTLE_SEED` - Base seed for random draws
    /// - `BATTLE_MAX_TICKS` - Tick limit (default: 10000)
    /// - `BATTLE_TEST` - Run the battle-test encounter (default: false)
    /// - `BATTLE_MESSAGE_TICKS` - Message display time in ticks (default: 2)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("BATTLE_DATA_DIR") {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }
        if let Some(seed) = read_env::<u64>("BATTLE_SEED") {
            config.seed = seed;
        }
        if let Some(ticks) = read_env::<u32>("BATTLE_MAX_TICKS") {
            config.max_ticks = ticks.max(1);
        }
        if let Some(flag) = read_env_bool("BATTLE_TEST") {
            config.battle_test = flag;
        }
        if let Some(ticks) = read_env::<u32>("BATTLE_MESSAGE_TICKS") {
            config.message_ticks = ticks;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_values_are_lenient() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
