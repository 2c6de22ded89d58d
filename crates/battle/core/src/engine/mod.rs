//! Action scheduling and enemy AI.
//!
//! - [`TurnScheduler`]: FIFO of battlers waiting to act
//! - [`EnemyDecisionEngine`]: maps enemy action definitions to algorithms
mod decision;
mod scheduler;

pub use decision::{Assignment, Decision, DecisionError, DeferralReason, EnemyDecisionEngine};
pub use scheduler::{DetachedAction, SchedulerError, TurnScheduler};
