//! In-memory static data backing every oracle.
//!
//! Content loaders build a [`DataSnapshot`] from data files; tests build one
//! by hand. Tables are stored 0-based and addressed with 1-based ids.

use super::{
    ActorOracle, ActorTemplate, EnemyOracle, EnemyTemplate, SkillDefinition, SkillOracle,
    SystemData, SystemOracle, TroopDefinition, TroopOracle,
};
use crate::state::{ActorId, EnemyId, SkillId, TroopId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSnapshot {
    pub troops: Vec<TroopDefinition>,
    pub enemies: Vec<EnemyTemplate>,
    pub skills: Vec<SkillDefinition>,
    pub actors: Vec<ActorTemplate>,
    pub system: SystemData,
}

impl DataSnapshot {
    pub fn new(
        troops: Vec<TroopDefinition>,
        enemies: Vec<EnemyTemplate>,
        skills: Vec<SkillDefinition>,
        actors: Vec<ActorTemplate>,
        system: SystemData,
    ) -> Self {
        Self {
            troops,
            enemies,
            skills,
            actors,
            system,
        }
    }
}

impl TroopOracle for DataSnapshot {
    fn troop_count(&self) -> usize {
        self.troops.len()
    }

    fn troop(&self, id: TroopId) -> Option<&TroopDefinition> {
        self.troops.get(id.index()?)
    }
}

impl EnemyOracle for DataSnapshot {
    fn enemy(&self, id: EnemyId) -> Option<&EnemyTemplate> {
        self.enemies.get(id.index()?)
    }
}

impl SkillOracle for DataSnapshot {
    fn skill(&self, id: SkillId) -> Option<&SkillDefinition> {
        self.skills.get(id.index()?)
    }
}

impl ActorOracle for DataSnapshot {
    fn actor(&self, id: ActorId) -> Option<&ActorTemplate> {
        self.actors.get(id.index()?)
    }
}

impl SystemOracle for DataSnapshot {
    fn system(&self) -> &SystemData {
        &self.system
    }
}
