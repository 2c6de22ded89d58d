use arrayvec::ArrayVec;

use super::{BattlerArena, BattlerId, Side};
use crate::config::BattleConfig;
use crate::env::RngOracle;

/// One side of the battle: an ordered list of battler handles.
///
/// Membership is fixed by the encounter setup; the scheduler, decision engine
/// and resolvers only read it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    side: Side,
    members: ArrayVec<BattlerId, { BattleConfig::MAX_SIDE_MEMBERS }>,
}

impl Party {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            members: ArrayVec::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Appends a member. Returns the id back if the side is already full.
    pub(crate) fn push(&mut self, id: BattlerId) -> Result<(), BattlerId> {
        self.members.try_push(id).map_err(|err| err.element())
    }

    pub fn members(&self) -> &[BattlerId] {
        &self.members
    }

    pub fn contains(&self, id: BattlerId) -> bool {
        self.members.contains(&id)
    }

    /// Members that are still standing, in party order.
    pub fn living<'p>(&'p self, arena: &'p BattlerArena) -> impl Iterator<Item = BattlerId> + 'p {
        self.members
            .iter()
            .copied()
            .filter(move |&id| arena.get(id).is_some_and(|battler| battler.is_alive()))
    }

    pub fn is_defeated(&self, arena: &BattlerArena) -> bool {
        self.living(arena).next().is_none()
    }

    /// Picks a uniformly random living member.
    ///
    /// Returns `None` when every member is down.
    pub fn random_living<R: RngOracle + ?Sized>(
        &self,
        arena: &BattlerArena,
        rng: &R,
        seed: u64,
    ) -> Option<BattlerId> {
        let living: ArrayVec<BattlerId, { BattleConfig::MAX_SIDE_MEMBERS }> =
            self.living(arena).collect();
        if living.is_empty() {
            return None;
        }
        let index = rng.range(seed, 0, living.len() as u32 - 1) as usize;
        living.get(index).copied()
    }
}
