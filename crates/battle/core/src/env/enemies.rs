//! Enemy species and their data-driven action lists.

use crate::config::BattleConfig;
use crate::state::{EnemyId, SkillId};

/// Oracle providing enemy species.
pub trait EnemyOracle: Send + Sync {
    fn enemy(&self, id: EnemyId) -> Option<&EnemyTemplate>;
}

/// Static definition of one enemy species.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub max_hp: u32,
    /// Candidate actions; one is drawn per round weighted by rating.
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Vec<EnemyActionDefinition>,
}

/// Untargeted or auto-targeted actions every enemy can be given.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BasicAction {
    Attack,
    DualAttack,
    Defend,
    Observe,
    Charge,
    SelfDestruct,
    Escape,
    /// Explicitly skip the round.
    Nothing,
}

/// What an enemy action definition asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyActionKind {
    Basic(BasicAction),
    Skill(SkillId),
    /// Turn into another species.
    Transformation(EnemyId),
}

/// One entry of an enemy's action list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyActionDefinition {
    pub kind: EnemyActionKind,
    /// Selection weight in `1..=MAX_ACTION_RATING`.
    #[cfg_attr(feature = "serde", serde(default = "default_rating"))]
    pub rating: u8,
}

#[cfg(feature = "serde")]
fn default_rating() -> u8 {
    BattleConfig::DEFAULT_ACTION_RATING
}

impl EnemyActionDefinition {
    pub const fn new(kind: EnemyActionKind) -> Self {
        Self {
            kind,
            rating: BattleConfig::DEFAULT_ACTION_RATING,
        }
    }

    pub const fn basic(action: BasicAction) -> Self {
        Self::new(EnemyActionKind::Basic(action))
    }

    pub const fn skill(id: SkillId) -> Self {
        Self::new(EnemyActionKind::Skill(id))
    }

    pub const fn transformation(into: EnemyId) -> Self {
        Self::new(EnemyActionKind::Transformation(into))
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    /// Rating clamped to the valid range, used as the draw weight.
    pub fn weight(&self) -> u32 {
        self.rating.clamp(1, BattleConfig::MAX_ACTION_RATING) as u32
    }
}
