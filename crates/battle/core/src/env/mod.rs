//! Traits describing read-only battle data.
//!
//! Oracles expose the troop, enemy, skill, actor and system tables plus the
//! deterministic RNG. The [`BattleEnv`] aggregate bundles them so the scene
//! and decision engine can reach everything without depending on a concrete
//! data source.
mod actors;
mod enemies;
mod error;
mod rng;
mod skills;
mod snapshot;
mod system;
mod troops;

pub use actors::{ActorOracle, ActorTemplate};
pub use enemies::{
    BasicAction, EnemyActionDefinition, EnemyActionKind, EnemyOracle, EnemyTemplate,
};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use skills::{SkillDefinition, SkillOracle, SkillScope, SkillType};
pub use snapshot::DataSnapshot;
pub use system::{BattleTestSetup, SystemData, SystemOracle};
pub use troops::{TroopDefinition, TroopOracle};

/// Aggregates the read-only oracles needed during a battle.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    troops: Option<&'a dyn TroopOracle>,
    enemies: Option<&'a dyn EnemyOracle>,
    skills: Option<&'a dyn SkillOracle>,
    actors: Option<&'a dyn ActorOracle>,
    system: Option<&'a dyn SystemOracle>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> BattleEnv<'a> {
    pub fn new(
        troops: Option<&'a dyn TroopOracle>,
        enemies: Option<&'a dyn EnemyOracle>,
        skills: Option<&'a dyn SkillOracle>,
        actors: Option<&'a dyn ActorOracle>,
        system: Option<&'a dyn SystemOracle>,
        rng: Option<&'a dyn RngOracle>,
    ) -> Self {
        Self {
            troops,
            enemies,
            skills,
            actors,
            system,
            rng,
        }
    }

    /// Builds an environment where every table comes from one snapshot.
    pub fn from_snapshot(data: &'a DataSnapshot, rng: &'a dyn RngOracle) -> Self {
        Self::new(
            Some(data),
            Some(data),
            Some(data),
            Some(data),
            Some(data),
            Some(rng),
        )
    }

    pub fn empty() -> Self {
        Self::new(None, None, None, None, None, None)
    }

    /// # Errors
    ///
    /// Returns `OracleError::TroopsNotAvailable` if no troop oracle was provided.
    pub fn troops(&self) -> Result<&'a dyn TroopOracle, OracleError> {
        self.troops.ok_or(OracleError::TroopsNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::EnemiesNotAvailable` if no enemy oracle was provided.
    pub fn enemies(&self) -> Result<&'a dyn EnemyOracle, OracleError> {
        self.enemies.ok_or(OracleError::EnemiesNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no skill oracle was provided.
    pub fn skills(&self) -> Result<&'a dyn SkillOracle, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::ActorsNotAvailable` if no actor oracle was provided.
    pub fn actors(&self) -> Result<&'a dyn ActorOracle, OracleError> {
        self.actors.ok_or(OracleError::ActorsNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::SystemNotAvailable` if no system oracle was provided.
    pub fn system(&self) -> Result<&'a SystemData, OracleError> {
        self.system
            .map(|oracle| oracle.system())
            .ok_or(OracleError::SystemNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Looks up a skill by id.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillNotFound` for ids outside the skill table.
    pub fn skill(&self, id: crate::state::SkillId) -> Result<&'a SkillDefinition, OracleError> {
        self.skills()?.skill(id).ok_or(OracleError::SkillNotFound(id))
    }
}

impl std::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleEnv")
            .field("troops", &self.troops.is_some())
            .field("enemies", &self.enemies.is_some())
            .field("skills", &self.skills.is_some())
            .field("actors", &self.actors.is_some())
            .field("system", &self.system.is_some())
            .field("rng", &self.rng.is_some())
            .finish()
    }
}
