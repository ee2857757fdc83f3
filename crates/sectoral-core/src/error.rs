//! Error types for the Sectoral engine.
//!
//! Every variant here is structural: the snapshot pair cannot be turned into a
//! report. Data-quality findings on a successfully assembled report are not
//! errors; they are reported by the validator in `sectoral-analytics`.

use thiserror::Error;

/// A specialized Result type for Sectoral operations.
pub type SectoralResult<T> = Result<T, SectoralError>;

/// The main error type for Sectoral operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectoralError {
    /// A snapshot contains a code the sector registry does not know.
    #[error("Unknown sector code: '{code}'")]
    UnknownSectorCode {
        /// The unrecognised code.
        code: String,
    },

    /// The snapshot has no non-aggregate sectors.
    #[error("Dataset contains no sectors")]
    EmptyDataset,

    /// A division with a zero denominator.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that failed.
        operation: String,
    },

    /// A result does not fit the decimal range.
    #[error("Numerical overflow in {operation}")]
    ArithmeticOverflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// The current snapshot does not carry its reserved total.
    #[error("Snapshot is missing the reserved total '{code}'")]
    MissingTotal {
        /// The reserved aggregate code that was expected.
        code: String,
    },

    /// A sector appears in one snapshot but not the other.
    #[error("Sector '{code}' is missing from the {missing_from} snapshot")]
    SnapshotMismatch {
        /// The sector code present in only one snapshot.
        code: String,
        /// Which snapshot lacks it ("current" or "prior").
        missing_from: String,
    },

    /// Report configuration is inconsistent.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl SectoralError {
    /// Creates an unknown sector code error.
    #[must_use]
    pub fn unknown_sector(code: impl Into<String>) -> Self {
        Self::UnknownSectorCode { code: code.into() }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Creates an arithmetic overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::ArithmeticOverflow {
            operation: operation.into(),
        }
    }

    /// Creates a missing total error.
    #[must_use]
    pub fn missing_total(code: impl Into<String>) -> Self {
        Self::MissingTotal { code: code.into() }
    }

    /// Creates a snapshot mismatch error.
    #[must_use]
    pub fn snapshot_mismatch(code: impl Into<String>, missing_from: impl Into<String>) -> Self {
        Self::SnapshotMismatch {
            code: code.into(),
            missing_from: missing_from.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns true for a division-by-zero error.
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    /// Returns true for errors that leave a ratio undefined rather than
    /// invalidate the inputs (zero denominator or out-of-range result).
    #[must_use]
    pub fn is_undefined_ratio(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero { .. } | Self::ArithmeticOverflow { .. }
        )
    }
}
