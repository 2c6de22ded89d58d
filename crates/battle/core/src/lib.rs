//! Deterministic battle rules shared across battle frontends.
//!
//! `battle-core` owns the turn-based combat orchestration: the battle scene
//! state machine, the FIFO turn scheduler, and the enemy decision engine that
//! turns data-driven enemy actions into concrete [`ActionAlgorithm`]s.
//! Rendering, audio, windows and combat formulas are external collaborators
//! reached through the traits in [`scene::ports`] and the oracles in [`env`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod scene;
pub mod state;

pub use action::{ActionAlgorithm, AlgorithmKind, SkillTarget, TargetScope};
pub use config::BattleConfig;
pub use engine::{
    Assignment, Decision, DecisionError, DeferralReason, DetachedAction, EnemyDecisionEngine,
    SchedulerError, TurnScheduler,
};
pub use env::{
    ActorOracle, ActorTemplate, BasicAction, BattleEnv, BattleTestSetup, DataSnapshot,
    EnemyActionDefinition, EnemyActionKind, EnemyOracle, EnemyTemplate, OracleError, PcgRng,
    RngOracle, SkillDefinition, SkillOracle, SkillScope, SkillType, SystemData, SystemOracle,
    TroopDefinition, TroopOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use scene::{
    Background, BattlePhase, BattleResult, BattleScene, BattleServices, BattleUi, CommandSource,
    EffectResolver, EncounterEvents, PartyOption, PlayerCommand, Presentation, SceneError,
    StartOutcome,
};
pub use state::{
    ActorId, BattleContext, Battler, BattlerArena, BattlerId, BattlerOrigin, EnemyId, HitPoints,
    Party, Side, SkillId, TerrainId, TroopId,
};
