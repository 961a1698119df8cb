//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g., `MoveError`, `TransitionError`) are defined in
//! their respective modules alongside the operations they guard.
//!
//! Most failures in this crate are routine gameplay events: a blocked step or an
//! exit with no room behind it. They are reported as recoverable errors so the
//! caller can drop them, and nothing in the tick path panics.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Expected during play; the request is simply dropped.
    ///
    /// Examples: destination blocked, exit leads nowhere
    Recoverable,

    /// Invalid input that should not be retried without changes.
    ///
    /// Examples: malformed room grid, second player refused
    Validation,

    /// Unexpected state inconsistency.
    Internal,

    /// The session cannot continue.
    ///
    /// Examples: no starting room on the map
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

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
