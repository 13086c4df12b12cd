//! Common error infrastructure for legends-core.
//!
//! Domain-specific errors (e.g. `BattleError`, `TradeRejection`) are defined in
//! their respective modules alongside the operations they validate. This
//! module provides the classification shared by all of them.
//!
//! # Taxonomy
//!
//! - **Game-rule rejections** (not enough gold, mana or level) are
//!   [`ErrorSeverity::Recoverable`]: state is unchanged and the caller may
//!   pick another action.
//! - **Structural errors** (bad indices, dead targets, empty rosters, invalid
//!   coordinates) are [`ErrorSeverity::Validation`]: the operation fails and
//!   must not be retried unchanged.
//! - **Configuration errors** that leave a required roster empty are
//!   [`ErrorSeverity::Fatal`].

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry with the same or an alternative action.
    ///
    /// Examples: insufficient mana, insufficient gold
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: hero index out of range, target already defeated
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the session cannot continue.
    ///
    /// Examples: no heroes could be loaded
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

/// Common trait for all legends-core errors.
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
