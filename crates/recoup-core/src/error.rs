//! Error types for the Recoup library.
//!
//! The metric functions themselves never fail. These errors are raised by the
//! validation layer that callers may run before computing anything.

use thiserror::Error;

/// A specialized Result type for Recoup operations.
pub type RecoupResult<T> = Result<T, RecoupError>;

/// The main error type for Recoup operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecoupError {
    /// A monetary amount is negative or not a finite number.
    #[error("Invalid {field}: {value} - {reason}")]
    InvalidAmount {
        /// Name of the offending input.
        field: String,
        /// The rejected value.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// A growth rate cannot be used in a series evaluation.
    #[error("Invalid rate: {value} - {reason}")]
    InvalidRate {
        /// The rejected rate.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },
}

impl RecoupError {
    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            value,
            reason: reason.into(),
        }
    }
}
