//! Resolved combat actions.
//!
//! An [`ActionAlgorithm`] is what a battler will do once its queue entry
//! resolves. The set is closed: each variant carries exactly the data the
//! external effect resolver needs, and nothing here computes damage or hit
//! chance.

use crate::state::{BattleContext, BattlerId, EnemyId, Side, SkillId};

/// Target of a skill algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillTarget {
    /// A single battler (including the caster itself).
    Battler(BattlerId),
    /// Every living member of one side.
    Group(Side),
}

/// One resolved action, owned by the battler that will perform it.
///
/// The performing battler (the caster for skills) is the owner and is not
/// repeated in the variant data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionAlgorithm {
    /// Plain weapon attack. `None` when nobody was standing to be picked.
    Normal { target: Option<BattlerId> },
    /// Two consecutive weapon attacks on the same target.
    NormalDual { target: Option<BattlerId> },
    Defend,
    Observe,
    /// Build up power for the next attack.
    Charge,
    SelfDestruct,
    Escape,
    Skill { skill: SkillId, target: SkillTarget },
    /// Turn the performing enemy into another species.
    Transform { into: EnemyId },
}

/// Discriminant of [`ActionAlgorithm`], for logging and assertions.
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
pub enum AlgorithmKind {
    Normal,
    NormalDual,
    Defend,
    Observe,
    Charge,
    SelfDestruct,
    Escape,
    Skill,
    Transform,
}

/// Who an algorithm affects, from the performer's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetScope {
    /// Only the performer.
    SelfOnly,
    Single(BattlerId),
    Group(Side),
    /// An attack that found no target when it was decided.
    Untargeted,
}

impl ActionAlgorithm {
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Self::Normal { .. } => AlgorithmKind::Normal,
            Self::NormalDual { .. } => AlgorithmKind::NormalDual,
            Self::Defend => AlgorithmKind::Defend,
            Self::Observe => AlgorithmKind::Observe,
            Self::Charge => AlgorithmKind::Charge,
            Self::SelfDestruct => AlgorithmKind::SelfDestruct,
            Self::Escape => AlgorithmKind::Escape,
            Self::Skill { .. } => AlgorithmKind::Skill,
            Self::Transform { .. } => AlgorithmKind::Transform,
        }
    }

    /// Target scope when performed by `actor`.
    ///
    /// Self-destruct hits the performer's opponents as a group.
    pub fn scope(&self, actor: BattlerId, actor_side: Side) -> TargetScope {
        match *self {
            Self::Normal { target } | Self::NormalDual { target } => {
                target.map_or(TargetScope::Untargeted, TargetScope::Single)
            }
            Self::SelfDestruct => TargetScope::Group(actor_side.opponent()),
            Self::Skill {
                target: SkillTarget::Battler(target),
                ..
            } if target == actor => TargetScope::SelfOnly,
            Self::Skill {
                target: SkillTarget::Battler(target),
                ..
            } => TargetScope::Single(target),
            Self::Skill {
                target: SkillTarget::Group(side),
                ..
            } => TargetScope::Group(side),
            Self::Defend | Self::Observe | Self::Charge | Self::Escape | Self::Transform { .. } => {
                TargetScope::SelfOnly
            }
        }
    }

    /// Expands the scope into the battlers currently affected.
    ///
    /// Group scopes only include living members; a single target is returned
    /// as-is so the resolver can decide how to handle a fallen target.
    pub fn targets(&self, actor: BattlerId, ctx: &BattleContext) -> Vec<BattlerId> {
        let Some(performer) = ctx.battler(actor) else {
            return Vec::new();
        };
        match self.scope(actor, performer.side()) {
            TargetScope::SelfOnly => vec![actor],
            TargetScope::Single(target) => vec![target],
            TargetScope::Group(side) => ctx.side(side).living(ctx.battlers()).collect(),
            TargetScope::Untargeted => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorId, BattlerOrigin, TroopId};

    #[test]
    fn self_targeted_skill_has_self_scope() {
        let skill = ActionAlgorithm::Skill {
            skill: SkillId(7),
            target: SkillTarget::Battler(BattlerId(3)),
        };
        assert_eq!(skill.scope(BattlerId(3), Side::Troop), TargetScope::SelfOnly);
        assert_eq!(
            skill.scope(BattlerId(1), Side::Troop),
            TargetScope::Single(BattlerId(3))
        );
    }

    #[test]
    fn group_targets_skip_fallen_members() {
        let mut ctx = BattleContext::new(TroopId(1), 0);
        let slime = ctx
            .spawn("Slime", BattlerOrigin::Enemy(EnemyId(1)), 10)
            .unwrap();
        let alex = ctx.spawn("Alex", BattlerOrigin::Actor(ActorId(1)), 30).unwrap();
        let brian = ctx.spawn("Brian", BattlerOrigin::Actor(ActorId(2)), 30).unwrap();
        ctx.battler_mut(alex).unwrap().take_damage(30);

        let algorithm = ActionAlgorithm::Skill {
            skill: SkillId(2),
            target: SkillTarget::Group(Side::Party),
        };
        assert_eq!(algorithm.targets(slime, &ctx), vec![brian]);
        assert_eq!(ActionAlgorithm::SelfDestruct.targets(slime, &ctx), vec![brian]);
    }

    #[test]
    fn untargeted_attack_affects_nobody() {
        let mut ctx = BattleContext::new(TroopId(1), 0);
        let slime = ctx
            .spawn("Slime", BattlerOrigin::Enemy(EnemyId(1)), 10)
            .unwrap();

        let attack = ActionAlgorithm::NormalDual { target: None };
        assert_eq!(attack.scope(slime, Side::Troop), TargetScope::Untargeted);
        assert!(attack.targets(slime, &ctx).is_empty());
    }

    #[test]
    fn kind_round_trips_through_str() {
        assert_eq!(AlgorithmKind::SelfDestruct.to_string(), "self_destruct");
        assert_eq!("normal_dual".parse(), Ok(AlgorithmKind::NormalDual));
    }
}
