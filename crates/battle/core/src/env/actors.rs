use crate::state::ActorId;

/// Oracle providing party member (hero) definitions.
pub trait ActorOracle: Send + Sync {
    fn actor(&self, id: ActorId) -> Option<&ActorTemplate>;
}

/// Static definition of a party member as it enters battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub name: String,
    pub max_hp: u32,
}

impl ActorTemplate {
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
        }
    }
}
