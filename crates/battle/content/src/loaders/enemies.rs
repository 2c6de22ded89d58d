//! Enemy template loader.

use std::path::Path;

use battle_core::{BattleConfig, EnemyTemplate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy table structure for RON files. Row `n` is enemy id `n + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load enemy templates from a RON file.
    ///
    /// Ratings above the maximum are rejected rather than clamped so that
    /// typos in data files surface at load time.
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<EnemyTemplate>> {
        let catalog: EnemyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        for enemy in &catalog.enemies {
            if let Some(action) = enemy
                .actions
                .iter()
                .find(|action| action.rating > BattleConfig::MAX_ACTION_RATING)
            {
                anyhow::bail!(
                    "Enemy '{}' has action {:?} rated {} (maximum {})",
                    enemy.name,
                    action.kind,
                    action.rating,
                    BattleConfig::MAX_ACTION_RATING
                );
            }
        }

        Ok(catalog.enemies)
    }
}
