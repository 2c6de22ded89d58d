use crate::engine::{DecisionError, SchedulerError};
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorId, EnemyId};

/// Errors surfaced by the battle scene.
///
/// An invalid troop id is not an error: `start` reports it as
/// [`StartOutcome::Aborted`](super::StartOutcome::Aborted).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("battle has not been started")]
    NotStarted,

    #[error("{0} is listed in the troop but has no template")]
    MissingEnemy(EnemyId),

    #[error("{0} is in the party roster but has no template")]
    MissingActor(ActorId),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

impl GameError for SceneError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotStarted => ErrorSeverity::Internal,
            Self::MissingEnemy(_) | Self::MissingActor(_) => ErrorSeverity::Validation,
            Self::Oracle(err) => err.severity(),
            Self::Decision(err) => err.severity(),
            Self::Scheduler(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotStarted => "SCENE_NOT_STARTED",
            Self::MissingEnemy(_) => "SCENE_MISSING_ENEMY",
            Self::MissingActor(_) => "SCENE_MISSING_ACTOR",
            Self::Oracle(err) => err.error_code(),
            Self::Decision(err) => err.error_code(),
            Self::Scheduler(err) => err.error_code(),
        }
    }
}
