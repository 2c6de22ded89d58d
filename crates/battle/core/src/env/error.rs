//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EnemyId, SkillId};

/// Errors that occur when accessing static battle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("TroopOracle not available")]
    TroopsNotAvailable,

    #[error("EnemyOracle not available")]
    EnemiesNotAvailable,

    #[error("SkillOracle not available")]
    SkillsNotAvailable,

    #[error("ActorOracle not available")]
    ActorsNotAvailable,

    #[error("SystemOracle not available")]
    SystemNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("{0} not found")]
    EnemyNotFound(EnemyId),

    #[error("{0} not found")]
    SkillNotFound(SkillId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - the battle cannot proceed
            TroopsNotAvailable | EnemiesNotAvailable | SkillsNotAvailable | ActorsNotAvailable
            | SystemNotAvailable | RngNotAvailable => ErrorSeverity::Fatal,

            EnemyNotFound(_) | SkillNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            TroopsNotAvailable => "ORACLE_TROOPS_NOT_AVAILABLE",
            EnemiesNotAvailable => "ORACLE_ENEMIES_NOT_AVAILABLE",
            SkillsNotAvailable => "ORACLE_SKILLS_NOT_AVAILABLE",
            ActorsNotAvailable => "ORACLE_ACTORS_NOT_AVAILABLE",
            SystemNotAvailable => "ORACLE_SYSTEM_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            EnemyNotFound(_) => "ORACLE_ENEMY_NOT_FOUND",
            SkillNotFound(_) => "ORACLE_SKILL_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rows_are_validation_errors() {
        let err = OracleError::SkillNotFound(SkillId(12));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "ORACLE_SKILL_NOT_FOUND");
        assert_eq!(
            OracleError::RngNotAvailable.severity(),
            ErrorSeverity::Fatal
        );
    }
}
