//! Content factory for building a data snapshot from data files.

use std::path::{Path, PathBuf};

use battle_core::{ActorOracle, DataSnapshot, EnemyActionKind, EnemyOracle, TroopOracle};

use crate::loaders::{ActorLoader, EnemyLoader, LoadResult, SkillLoader, SystemLoader, TroopLoader};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── system.toml
/// ├── troops.ron
/// ├── enemies.ron
/// ├── skills.ron
/// └── actors.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load system settings from `system.toml`.
    pub fn load_system(&self) -> LoadResult<battle_core::SystemData> {
        SystemLoader::load(&self.data_dir.join("system.toml"))
    }

    /// Load the troop table from `troops.ron`.
    pub fn load_troops(&self) -> LoadResult<Vec<battle_core::TroopDefinition>> {
        TroopLoader::load(&self.data_dir.join("troops.ron"))
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<battle_core::EnemyTemplate>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load the skill table from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<battle_core::SkillDefinition>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load party member templates from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<Vec<battle_core::ActorTemplate>> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Loads every table and checks cross references between them.
    pub fn load_snapshot(&self) -> LoadResult<DataSnapshot> {
        let snapshot = DataSnapshot::new(
            self.load_troops()?,
            self.load_enemies()?,
            self.load_skills()?,
            self.load_actors()?,
            self.load_system()?,
        );
        validate(&snapshot)?;

        tracing::debug!(
            data_dir = %self.data_dir.display(),
            troops = snapshot.troops.len(),
            enemies = snapshot.enemies.len(),
            skills = snapshot.skills.len(),
            actors = snapshot.actors.len(),
            "battle content loaded"
        );
        Ok(snapshot)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// The demo data set compiled into the crate.
pub fn bundled_snapshot() -> LoadResult<DataSnapshot> {
    let snapshot = DataSnapshot::new(
        TroopLoader::parse(include_str!("../../data/troops.ron"))?,
        EnemyLoader::parse(include_str!("../../data/enemies.ron"))?,
        SkillLoader::parse(include_str!("../../data/skills.ron"))?,
        ActorLoader::parse(include_str!("../../data/actors.ron"))?,
        SystemLoader::parse(include_str!("../../data/system.toml"))?,
    );
    validate(&snapshot)?;
    Ok(snapshot)
}

/// Every id referenced by one table must exist in the table it points to.
///
/// Skills named by enemy actions are not checked: an unknown skill is
/// reported by the decision engine when the action is chosen.
fn validate(snapshot: &DataSnapshot) -> LoadResult<()> {
    for (index, troop) in snapshot.troops.iter().enumerate() {
        for &enemy in &troop.members {
            if snapshot.enemy(enemy).is_none() {
                anyhow::bail!(
                    "Troop {} ('{}') references missing {}",
                    index + 1,
                    troop.name,
                    enemy
                );
            }
        }
    }

    for template in &snapshot.enemies {
        for action in &template.actions {
            let EnemyActionKind::Transformation(into) = action.kind else {
                continue;
            };
            if snapshot.enemy(into).is_none() {
                anyhow::bail!("Enemy '{}' transforms into missing {}", template.name, into);
            }
        }
    }

    let test = &snapshot.system.battle_test;
    if snapshot.troop(test.troop).is_none() && snapshot.troop_count() > 0 {
        tracing::warn!(troop = %test.troop, "battle-test troop is not in the troop table");
    }
    for &actor in &test.members {
        if snapshot.actor(actor).is_none() {
            anyhow::bail!("Battle-test party references missing {}", actor);
        }
    }
    Ok(())
}
