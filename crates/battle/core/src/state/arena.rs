use super::{Battler, BattlerId, BattlerOrigin};

/// Owns every battler taking part in one battle.
///
/// Battlers are addressed by [`BattlerId`], which doubles as the index into
/// the arena. Entries are never removed while the battle runs, so an id held
/// by the scheduler can go stale (dead battler) but never dangle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattlerArena {
    battlers: Vec<Battler>,
}

impl BattlerArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a battler and returns its freshly allocated id.
    pub fn spawn(&mut self, name: impl Into<String>, origin: BattlerOrigin, max_hp: u32) -> BattlerId {
        let id = BattlerId(self.battlers.len() as u32);
        self.battlers.push(Battler::new(id, name, origin, max_hp));
        id
    }

    pub fn get(&self, id: BattlerId) -> Option<&Battler> {
        self.battlers.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: BattlerId) -> Option<&mut Battler> {
        self.battlers.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Battler> {
        self.battlers.iter()
    }

    pub fn len(&self) -> usize {
        self.battlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.battlers.is_empty()
    }
}
