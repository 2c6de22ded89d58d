use super::{ActorId, BattlerId, EnemyId};
use crate::action::ActionAlgorithm;

/// Which side of the battle a battler fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    /// The player's party.
    Party,
    /// The enemy troop.
    Troop,
}

impl Side {
    /// Returns the side this side fights against.
    pub const fn opponent(self) -> Self {
        match self {
            Side::Party => Side::Troop,
            Side::Troop => Side::Party,
        }
    }
}

/// Static data row a battler was spawned from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlerOrigin {
    Actor(ActorId),
    Enemy(EnemyId),
}

impl BattlerOrigin {
    pub const fn side(self) -> Side {
        match self {
            BattlerOrigin::Actor(_) => Side::Party,
            BattlerOrigin::Enemy(_) => Side::Troop,
        }
    }
}

/// Hit point meter tracked per battler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitPoints {
    pub current: u32,
    pub maximum: u32,
}

impl HitPoints {
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }
}

/// A combat participant: a party member or an enemy.
///
/// A battler owns at most one [`ActionAlgorithm`]. Assignment goes through
/// [`BattleContext::assign_action`](super::BattleContext::assign_action) so
/// the scheduler and the battler never disagree about a pending action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battler {
    pub id: BattlerId,
    pub name: String,
    pub origin: BattlerOrigin,
    pub hp: HitPoints,
    algorithm: Option<ActionAlgorithm>,
}

impl Battler {
    pub fn new(id: BattlerId, name: impl Into<String>, origin: BattlerOrigin, max_hp: u32) -> Self {
        Self {
            id,
            name: name.into(),
            origin,
            hp: HitPoints::full(max_hp),
            algorithm: None,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.origin.side()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp.current > 0
    }

    pub fn is_enemy(&self) -> bool {
        self.side() == Side::Troop
    }

    /// The action this battler will perform when its queue entry resolves.
    pub fn algorithm(&self) -> Option<&ActionAlgorithm> {
        self.algorithm.as_ref()
    }

    pub fn has_algorithm(&self) -> bool {
        self.algorithm.is_some()
    }

    /// Lowers hit points, saturating at zero. Returns the damage dealt.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.hp.current);
        self.hp.current -= dealt;
        dealt
    }

    /// Raises hit points up to the maximum. Returns the amount restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let missing = self.hp.maximum - self.hp.current;
        let restored = amount.min(missing);
        self.hp.current += restored;
        restored
    }

    /// Replaces the assigned algorithm, returning the discarded one.
    pub(crate) fn set_algorithm(&mut self, algorithm: ActionAlgorithm) -> Option<ActionAlgorithm> {
        self.algorithm.replace(algorithm)
    }

    pub(crate) fn take_algorithm(&mut self) -> Option<ActionAlgorithm> {
        self.algorithm.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> Battler {
        Battler::new(BattlerId(1), "Goblin", BattlerOrigin::Enemy(EnemyId(1)), 20)
    }

    #[test]
    fn damage_saturates_at_zero() {
        let mut battler = goblin();
        assert_eq!(battler.take_damage(50), 20);
        assert!(!battler.is_alive());
        assert_eq!(battler.restore(5), 5);
        assert!(battler.is_alive());
    }

    #[test]
    fn assigning_replaces_previous_algorithm() {
        let mut battler = goblin();
        assert_eq!(battler.set_algorithm(ActionAlgorithm::Defend), None);
        let previous = battler.set_algorithm(ActionAlgorithm::Charge);
        assert_eq!(previous, Some(ActionAlgorithm::Defend));
        assert_eq!(battler.algorithm(), Some(&ActionAlgorithm::Charge));
    }
}
