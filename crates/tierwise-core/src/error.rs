//! Error types for the Tierwise engine.
//!
//! Every failure in the calculation core is a caller or precondition error;
//! nothing here is transient or worth retrying.

use thiserror::Error;

/// A specialized Result type for Tierwise operations.
pub type TierwiseResult<T> = Result<T, TierwiseError>;

/// The main error type for Tierwise operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TierwiseError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A range whose start lies after its end.
    #[error("Invalid range: {reason}")]
    InvalidRange {
        /// Description of what's wrong with the range.
        reason: String,
    },

    /// A required argument was missing or unusable.
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Tier boundaries and conversion factors do not describe the same tiers.
    #[error(
        "Tier schedule mismatch: {boundaries} boundaries require {} conversion factors, got {factors}",
        .boundaries + 1
    )]
    TierScheduleMismatch {
        /// Number of tier boundaries supplied.
        boundaries: usize,
        /// Number of conversion factors supplied.
        factors: usize,
    },
}

impl TierwiseError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid range error.
    #[must_use]
    pub fn invalid_range(reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            reason: reason.into(),
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Creates a tier schedule mismatch error.
    #[must_use]
    pub fn tier_schedule_mismatch(boundaries: usize, factors: usize) -> Self {
        Self::TierScheduleMismatch {
            boundaries,
            factors,
        }
    }
}
