//! Data-driven battle content and loaders.
//!
//! Static battle data lives in RON/TOML files:
//! - troops (monster parties)
//! - enemy templates with their action lists
//! - skills
//! - party member templates
//! - system settings (battle audio, default terrain, battle-test setup)
//!
//! Loaders produce a [`battle_core::DataSnapshot`], which implements every
//! read-only oracle the battle scene needs. A small demo data set is bundled
//! into the crate for tools and tests.

pub mod loaders;

pub use loaders::{
    ActorLoader, ContentFactory, EnemyLoader, LoadResult, SkillLoader, SystemLoader, TroopLoader,
    bundled_snapshot,
};
