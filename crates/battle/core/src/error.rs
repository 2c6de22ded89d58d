//! Common error infrastructure for battle-core.
//!
//! Domain errors (`OracleError`, `SchedulerError`, `DecisionError`,
//! `SceneError`) live next to the code that raises them. This module only
//! holds the shared classification used by logging and by callers deciding
//! whether to retry, skip, or abort a battle.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the battle can continue, possibly with a different action
/// - **Validation**: invalid input or data reference, should not be retried as-is
/// - **Internal**: a broken contract between battle components (a bug)
/// - **Fatal**: the battle cannot proceed at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// Implementors derive `thiserror::Error` for `Display` and classify each
/// variant here so frontends can log and react uniformly.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant.
    ///
    /// Defaults to the type name; implementors return stable codes per variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
