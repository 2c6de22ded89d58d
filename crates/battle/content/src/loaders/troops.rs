//! Troop (monster party) loader.

use std::path::Path;

use battle_core::TroopDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Troop table structure for RON files. Row `n` is troop id `n + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TroopCatalog {
    pub troops: Vec<TroopDefinition>,
}

/// Loader for the troop table from RON files.
pub struct TroopLoader;

impl TroopLoader {
    /// Load the troop table from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<TroopDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<TroopDefinition>> {
        let catalog: TroopCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse troop catalog RON: {}", e))?;

        Ok(catalog.troops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::EnemyId;

    #[test]
    fn parses_member_ids() {
        let troops = TroopLoader::parse(
            r#"(
                troops: [
                    (name: "Slimes", members: [1, 1]),
                    (name: "Bat", members: [3]),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(troops.len(), 2);
        assert_eq!(troops[0].members, [EnemyId(1), EnemyId(1)]);
        assert_eq!(troops[1].name, "Bat");
    }
}
