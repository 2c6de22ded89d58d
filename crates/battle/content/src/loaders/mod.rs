//! Content loaders for reading battle data from files.
//!
//! Each table has its own loader; [`ContentFactory`] loads a whole data
//! directory into a [`battle_core::DataSnapshot`].

pub mod actors;
pub mod enemies;
pub mod factory;
pub mod skills;
pub mod system;
pub mod troops;

pub use actors::ActorLoader;
pub use enemies::EnemyLoader;
pub use factory::{ContentFactory, bundled_snapshot};
pub use skills::SkillLoader;
pub use system::SystemLoader;
pub use troops::TroopLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
