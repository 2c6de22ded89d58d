//! System settings loader.

use std::path::Path;

use battle_core::SystemData;

use crate::loaders::{LoadResult, read_file};

/// Loader for system settings from TOML files.
pub struct SystemLoader;

impl SystemLoader {
    /// Load system settings from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SystemData> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SystemData> {
        let system: SystemData = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse system TOML: {}", e))?;

        Ok(system)
    }
}
