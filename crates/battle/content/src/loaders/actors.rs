//! Party member template loader.

use std::path::Path;

use battle_core::ActorTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Actor table structure for RON files. Row `n` is actor id `n + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorCatalog {
    pub actors: Vec<ActorTemplate>,
}

/// Loader for party member templates from RON files.
pub struct ActorLoader;

impl ActorLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ActorTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ActorTemplate>> {
        let catalog: ActorCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        Ok(catalog.actors)
    }
}
