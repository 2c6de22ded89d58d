//! Enemy decision engine.
//!
//! Converts a data-driven [`EnemyActionDefinition`] into a concrete
//! [`ActionAlgorithm`], assigns it to the enemy and enqueues the enemy in the
//! same call. Scopes that need a per-target choice from the input layer are
//! reported as [`Decision::Deferred`] instead of being guessed.

use crate::action::{ActionAlgorithm, AlgorithmKind, SkillTarget};
use crate::env::{
    BasicAction, BattleEnv, EnemyActionDefinition, EnemyActionKind, OracleError, SkillScope,
    SkillType,
};
use crate::error::{ErrorSeverity, GameError};
use crate::scene::BattlePhase;
use crate::state::{BattleContext, BattlerId, BattlerOrigin, EnemyId, Side, SkillId};

use super::SchedulerError;

/// Draw purpose passed to [`BattleContext::next_seed`].
const ACTION_DRAW: u32 = 0;
const TARGET_DRAW: u32 = 1;

/// How an assignment landed in the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assignment {
    /// The battler was appended to the queue.
    Enqueued,
    /// The battler was already queued; its algorithm was swapped in place.
    Replaced,
}

/// Why a decision produced no action without being an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferralReason {
    /// Single-target scopes are chosen by the input layer.
    SingleTargetScope(SkillScope),
    /// Non-normal skill types run through the "begin skill" path.
    BeginSkill(SkillType),
    /// Ally-wide skill requested while no skill is selected in the UI.
    NoSelectedSkill,
}

/// Outcome of one enemy decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Assigned {
        kind: AlgorithmKind,
        assignment: Assignment,
        /// Phase the battle scene should switch to, if any.
        next_phase: Option<BattlePhase>,
    },
    /// The definition explicitly does nothing this round.
    NoAction,
    Deferred(DeferralReason),
}

impl Decision {
    pub fn is_assigned(&self) -> bool {
        matches!(self, Decision::Assigned { .. })
    }
}

/// Errors surfaced while deciding an enemy action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("battler {0} does not exist")]
    UnknownBattler(BattlerId),

    #[error("battler {0} is not an enemy")]
    NotAnEnemy(BattlerId),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

impl GameError for DecisionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownBattler(_) | Self::NotAnEnemy(_) => ErrorSeverity::Validation,
            Self::Oracle(err) => err.severity(),
            Self::Scheduler(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownBattler(_) => "DECISION_UNKNOWN_BATTLER",
            Self::NotAnEnemy(_) => "DECISION_NOT_AN_ENEMY",
            Self::Oracle(err) => err.error_code(),
            Self::Scheduler(err) => err.error_code(),
        }
    }
}

/// Maps enemy action definitions to algorithms against the current battle.
#[derive(Clone, Copy, Debug)]
pub struct EnemyDecisionEngine<'e> {
    env: BattleEnv<'e>,
}

impl<'e> EnemyDecisionEngine<'e> {
    pub fn new(env: BattleEnv<'e>) -> Self {
        Self { env }
    }

    /// Picks one of the enemy's action definitions for this round.
    ///
    /// The draw is weighted by rating. Returns `None` for species without
    /// any action definitions.
    pub fn choose_action(
        &self,
        ctx: &mut BattleContext,
        enemy: BattlerId,
    ) -> Result<Option<EnemyActionDefinition>, DecisionError> {
        let species = enemy_species(ctx, enemy)?;
        let template = self
            .env
            .enemies()?
            .enemy(species)
            .ok_or(OracleError::EnemyNotFound(species))?;

        let weights: Vec<u32> = template.actions.iter().map(|def| def.weight()).collect();
        let seed = ctx.next_seed(enemy, ACTION_DRAW);
        let choice = self
            .env
            .rng()?
            .weighted_index(seed, &weights)
            .and_then(|index| template.actions.get(index).copied());
        Ok(choice)
    }

    /// Resolves `def` for `enemy`, assigning and enqueuing when it yields an
    /// algorithm.
    ///
    /// `selected_skill` is the skill currently highlighted in the skill
    /// window; it is only consulted for ally-wide skills.
    pub fn create_enemy_action(
        &self,
        ctx: &mut BattleContext,
        enemy: BattlerId,
        def: &EnemyActionDefinition,
        selected_skill: Option<SkillId>,
    ) -> Result<Decision, DecisionError> {
        enemy_species(ctx, enemy)?;

        let decision = match def.kind {
            EnemyActionKind::Basic(basic) => self.create_basic_action(ctx, enemy, basic)?,
            EnemyActionKind::Skill(skill) => {
                self.create_skill_action(ctx, enemy, skill, selected_skill)?
            }
            EnemyActionKind::Transformation(into) => {
                assign(ctx, enemy, ActionAlgorithm::Transform { into }, None)?
            }
        };

        tracing::debug!(enemy = %enemy, ?def, ?decision, "enemy action decided");
        Ok(decision)
    }

    /// Basic actions: attacks pick a random living party member, the rest
    /// carry no target, and `Nothing` assigns nothing.
    ///
    /// An attack is assigned and queued even when the party has nobody
    /// standing; its target is then `None` and left to the resolver.
    pub fn create_basic_action(
        &self,
        ctx: &mut BattleContext,
        enemy: BattlerId,
        basic: BasicAction,
    ) -> Result<Decision, DecisionError> {
        let algorithm = match basic {
            BasicAction::Attack | BasicAction::DualAttack => {
                let target = self.random_party_target(ctx, enemy)?;
                if basic == BasicAction::Attack {
                    ActionAlgorithm::Normal { target }
                } else {
                    ActionAlgorithm::NormalDual { target }
                }
            }
            BasicAction::Defend => ActionAlgorithm::Defend,
            BasicAction::Observe => ActionAlgorithm::Observe,
            BasicAction::Charge => ActionAlgorithm::Charge,
            BasicAction::SelfDestruct => ActionAlgorithm::SelfDestruct,
            BasicAction::Escape => ActionAlgorithm::Escape,
            BasicAction::Nothing => return Ok(Decision::NoAction),
        };
        assign(ctx, enemy, algorithm, None)
    }

    /// Skill actions: only normal skills with an unambiguous scope are
    /// resolved here; every resolved skill moves the scene to `SelectActor`.
    pub fn create_skill_action(
        &self,
        ctx: &mut BattleContext,
        enemy: BattlerId,
        skill_id: SkillId,
        selected_skill: Option<SkillId>,
    ) -> Result<Decision, DecisionError> {
        let skill = self.env.skill(skill_id)?;

        if skill.skill_type != SkillType::Normal {
            return Ok(Decision::Deferred(DeferralReason::BeginSkill(
                skill.skill_type,
            )));
        }

        let (skill, target) = match skill.scope {
            scope @ (SkillScope::SingleEnemy | SkillScope::SingleAlly) => {
                return Ok(Decision::Deferred(DeferralReason::SingleTargetScope(scope)));
            }
            SkillScope::AllEnemies => (skill_id, SkillTarget::Group(Side::Party)),
            SkillScope::SelfOnly => (skill_id, SkillTarget::Battler(enemy)),
            // Uses the skill highlighted in the skill window, not `skill_id`.
            SkillScope::AllAllies => match selected_skill {
                Some(selected) => (selected, SkillTarget::Group(Side::Troop)),
                None => return Ok(Decision::Deferred(DeferralReason::NoSelectedSkill)),
            },
        };

        assign(
            ctx,
            enemy,
            ActionAlgorithm::Skill { skill, target },
            Some(BattlePhase::SelectActor),
        )
    }

    fn random_party_target(
        &self,
        ctx: &mut BattleContext,
        enemy: BattlerId,
    ) -> Result<Option<BattlerId>, DecisionError> {
        let rng = self.env.rng()?;
        let seed = ctx.next_seed(enemy, TARGET_DRAW);
        Ok(ctx.party().random_living(ctx.battlers(), rng, seed))
    }
}

fn enemy_species(ctx: &BattleContext, enemy: BattlerId) -> Result<EnemyId, DecisionError> {
    let battler = ctx
        .battler(enemy)
        .ok_or(DecisionError::UnknownBattler(enemy))?;
    match battler.origin {
        BattlerOrigin::Enemy(species) => Ok(species),
        BattlerOrigin::Actor(_) => Err(DecisionError::NotAnEnemy(enemy)),
    }
}

fn assign(
    ctx: &mut BattleContext,
    enemy: BattlerId,
    algorithm: ActionAlgorithm,
    next_phase: Option<BattlePhase>,
) -> Result<Decision, DecisionError> {
    let kind = algorithm.kind();
    let assignment = ctx.assign_action(enemy, algorithm)?;
    Ok(Decision::Assigned {
        kind,
        assignment,
        next_phase,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{
        ActorTemplate, DataSnapshot, EnemyTemplate, PcgRng, SkillDefinition, SystemData,
        TroopDefinition,
    };
    use crate::state::{ActorId, Battler, TroopId};

    fn data() -> DataSnapshot {
        let mut skills = vec![SkillDefinition::new("Filler", SkillType::Normal, SkillScope::SingleEnemy); 6];
        skills.push(SkillDefinition::new("Harden", SkillType::Normal, SkillScope::SelfOnly));
        skills.push(SkillDefinition::new("Blaze", SkillType::Normal, SkillScope::AllEnemies));
        skills.push(SkillDefinition::new("Rally", SkillType::Normal, SkillScope::AllAllies));
        skills.push(SkillDefinition::new("Blink", SkillType::Teleport, SkillScope::SelfOnly));
        skills.push(SkillDefinition::new("Mend", SkillType::Normal, SkillScope::SingleAlly));

        DataSnapshot::new(
            vec![TroopDefinition::new("Goblins", vec![EnemyId(1)])],
            vec![EnemyTemplate {
                name: "Goblin".into(),
                max_hp: 12,
                actions: vec![
                    EnemyActionDefinition::basic(BasicAction::Attack).with_rating(0),
                    EnemyActionDefinition::basic(BasicAction::Defend).with_rating(10),
                ],
            }],
            skills,
            vec![ActorTemplate::new("Alex", 30)],
            SystemData::default(),
        )
    }

    struct Battle {
        ctx: BattleContext,
        goblin: BattlerId,
        hero: BattlerId,
    }

    fn battle() -> Battle {
        let mut ctx = BattleContext::new(TroopId(1), 99);
        let hero = ctx.spawn("Alex", BattlerOrigin::Actor(ActorId(1)), 30).unwrap();
        let goblin = ctx
            .spawn("Goblin", BattlerOrigin::Enemy(EnemyId(1)), 12)
            .unwrap();
        Battle { ctx, goblin, hero }
    }

    fn queue(ctx: &BattleContext) -> Vec<BattlerId> {
        ctx.scheduler().iter().collect()
    }

    #[test]
    fn every_basic_action_but_nothing_enqueues_once() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));
        let actions = [
            BasicAction::Attack,
            BasicAction::DualAttack,
            BasicAction::Defend,
            BasicAction::Observe,
            BasicAction::Charge,
            BasicAction::SelfDestruct,
            BasicAction::Escape,
        ];

        for basic in actions {
            let mut battle = battle();
            let def = EnemyActionDefinition::basic(basic);
            let decision = engine
                .create_enemy_action(&mut battle.ctx, battle.goblin, &def, None)
                .unwrap();

            assert!(decision.is_assigned(), "{basic} should assign");
            assert_eq!(queue(&battle.ctx), vec![battle.goblin], "{basic}");
            assert!(battle.ctx.battler(battle.goblin).unwrap().has_algorithm());
        }
    }

    #[test]
    fn nothing_assigns_and_enqueues_nothing() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));
        let mut battle = battle();

        let decision = engine
            .create_enemy_action(
                &mut battle.ctx,
                battle.goblin,
                &EnemyActionDefinition::basic(BasicAction::Nothing),
                None,
            )
            .unwrap();

        assert_eq!(decision, Decision::NoAction);
        assert!(battle.ctx.scheduler().is_empty());
        assert!(!battle.ctx.battler(battle.goblin).unwrap().has_algorithm());
    }

    #[test]
    fn attack_targets_the_living_party_member() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));
        let mut battle = battle();

        engine
            .create_basic_action(&mut battle.ctx, battle.goblin, BasicAction::Attack)
            .unwrap();

        assert_eq!(
            battle.ctx.battler(battle.goblin).and_then(Battler::algorithm),
            Some(&ActionAlgorithm::Normal {
                target: Some(battle.hero)
            })
        );
    }

    #[test]
    fn attack_without_living_party_is_still_queued() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));
        let mut battle = battle();
        battle.ctx.battler_mut(battle.hero).unwrap().take_damage(30);

        let decision = engine
            .create_basic_action(&mut battle.ctx, battle.goblin, BasicAction::DualAttack)
            .unwrap();

        assert_eq!(
            decision,
            Decision::Assigned {
                kind: AlgorithmKind::NormalDual,
                assignment: Assignment::Enqueued,
                next_phase: None,
            }
        );
        assert_eq!(
            battle.ctx.battler(battle.goblin).and_then(Battler::algorithm),
            Some(&ActionAlgorithm::NormalDual { target: None })
        );
        assert_eq!(queue(&battle.ctx), vec![battle.goblin]);
    }

    #[test]
    fn transformation_assigns_transform_and_enqueues() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));
        let mut battle = battle();

        engine
            .create_enemy_action(
                &mut battle.ctx,
                battle.goblin,
                &EnemyActionDefinition::transformation(EnemyId(4)),
                None,
            )
            .unwrap();

        assert_eq!(
            battle.ctx.battler(battle.goblin).and_then(Battler::algorithm),
            Some(&ActionAlgorithm::Transform { into: EnemyId(4) })
        );
        assert_eq!(queue(&battle.ctx), vec![battle.goblin]);
    }

    #[test]
    fn self_skill_targets_caster_and_requests_select_actor() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));
        let mut battle = battle();

        let decision = engine
            .create_skill_action(&mut battle.ctx, battle.goblin, SkillId(7), None)
            .unwrap();

        assert_eq!(
            decision,
            Decision::Assigned {
                kind: AlgorithmKind::Skill,
                assignment: Assignment::Enqueued,
                next_phase: Some(BattlePhase::SelectActor),
            }
        );
        assert_eq!(
            battle.ctx.battler(battle.goblin).and_then(Battler::algorithm),
            Some(&ActionAlgorithm::Skill {
                skill: SkillId(7),
                target: SkillTarget::Battler(battle.goblin),
            })
        );
    }

    #[test]
    fn all_enemies_skill_targets_player_party() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));
        let mut battle = battle();

        engine
            .create_skill_action(&mut battle.ctx, battle.goblin, SkillId(8), None)
            .unwrap();

        assert_eq!(
            battle.ctx.battler(battle.goblin).and_then(Battler::algorithm),
            Some(&ActionAlgorithm::Skill {
                skill: SkillId(8),
                target: SkillTarget::Group(Side::Party),
            })
        );
    }

    #[test]
    fn all_allies_skill_uses_the_selected_skill() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));
        let mut battle = battle();

        engine
            .create_skill_action(&mut battle.ctx, battle.goblin, SkillId(9), Some(SkillId(2)))
            .unwrap();

        assert_eq!(
            battle.ctx.battler(battle.goblin).and_then(Battler::algorithm),
            Some(&ActionAlgorithm::Skill {
                skill: SkillId(2),
                target: SkillTarget::Group(Side::Troop),
            })
        );

        let mut battle = self::battle();
        let decision = engine
            .create_skill_action(&mut battle.ctx, battle.goblin, SkillId(9), None)
            .unwrap();
        assert_eq!(decision, Decision::Deferred(DeferralReason::NoSelectedSkill));
        assert!(battle.ctx.scheduler().is_empty());
    }

    #[test]
    fn reserved_skill_paths_enqueue_nothing() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));

        let cases = [
            (SkillId(1), DeferralReason::SingleTargetScope(SkillScope::SingleEnemy)),
            (SkillId(11), DeferralReason::SingleTargetScope(SkillScope::SingleAlly)),
            (SkillId(10), DeferralReason::BeginSkill(SkillType::Teleport)),
        ];
        for (skill, reason) in cases {
            let mut battle = battle();
            let decision = engine
                .create_skill_action(&mut battle.ctx, battle.goblin, skill, None)
                .unwrap();

            assert_eq!(decision, Decision::Deferred(reason));
            assert!(battle.ctx.scheduler().is_empty());
            assert!(!battle.ctx.battler(battle.goblin).unwrap().has_algorithm());
        }
    }

    #[test]
    fn unknown_skill_is_a_validation_error() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));
        let mut battle = battle();

        let err = engine
            .create_skill_action(&mut battle.ctx, battle.goblin, SkillId(0), None)
            .unwrap_err();

        assert_eq!(err, DecisionError::Oracle(OracleError::SkillNotFound(SkillId(0))));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(battle.ctx.scheduler().is_empty());
    }

    #[test]
    fn party_members_cannot_use_enemy_decisions() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));
        let mut battle = battle();

        let err = engine
            .create_enemy_action(
                &mut battle.ctx,
                battle.hero,
                &EnemyActionDefinition::basic(BasicAction::Defend),
                None,
            )
            .unwrap_err();
        assert_eq!(err, DecisionError::NotAnEnemy(battle.hero));
    }

    #[test]
    fn choose_action_respects_ratings() {
        let data = data();
        let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&data, &PcgRng));
        let mut battle = battle();

        // Attack has rating 0 and is clamped to weight 1, Defend weighs 10.
        let mut defends = 0;
        for _ in 0..200 {
            let def = engine
                .choose_action(&mut battle.ctx, battle.goblin)
                .unwrap()
                .unwrap();
            if def.kind == EnemyActionKind::Basic(BasicAction::Defend) {
                defends += 1;
            }
        }
        assert!(defends > 120, "defend drawn {defends} times");
    }
}
