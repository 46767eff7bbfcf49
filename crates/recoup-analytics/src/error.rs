//! Unified error types for the analytics layer.
//!
//! None of the metric or formatting functions fail. Errors come from input
//! validation, configuration loading, and the checked projection helpers.

use thiserror::Error;

use crate::config::ConfigError;

/// Unified error type for all analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Display configuration error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Domain validation error (from recoup-core)
    #[error("{0}")]
    Core(#[from] recoup_core::RecoupError),

    /// Math error (from recoup-math)
    #[error("math error: {0}")]
    Math(#[from] recoup_math::MathError),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use recoup_core::RecoupError;
    use recoup_math::MathError;

    #[test]
    fn test_from_core_error() {
        let err: AnalyticsError = RecoupError::invalid_amount("cost", -1.0, "negative").into();
        assert!(matches!(err, AnalyticsError::Core(_)));
        assert_eq!(err.to_string(), "Invalid cost: -1 - negative");
    }

    #[test]
    fn test_from_math_error() {
        let err: AnalyticsError = MathError::overflow("sum_geometric").into();
        assert_eq!(
            err.to_string(),
            "math error: Numerical overflow in sum_geometric"
        );
    }
}
