use crate::state::{EnemyId, TroopId};

/// Oracle providing the monster party table.
pub trait TroopOracle: Send + Sync {
    /// Number of rows in the troop table. Valid ids are `1..=troop_count()`.
    fn troop_count(&self) -> usize;

    fn troop(&self, id: TroopId) -> Option<&TroopDefinition>;
}

/// A data-defined group of enemies forming one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TroopDefinition {
    pub name: String,
    pub members: Vec<EnemyId>,
}

impl TroopDefinition {
    pub fn new(name: impl Into<String>, members: Vec<EnemyId>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}
