//! Configuration error types.

use std::fmt;

use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A single setting failed validation.
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// Several settings failed validation.
    #[error("{} validation errors: {}", .0.len(), join(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A display setting that was rejected, and the rule it broke.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Name of the rejected setting, as spelled in JSON.
    pub field: &'static str,
    /// What is wrong with the value.
    pub message: String,
    /// Short machine-readable rule name, e.g. `"max_precision"`.
    pub rule: &'static str,
}

impl ValidationError {
    /// Creates a validation error for `field` breaking `rule`.
    pub fn new(field: &'static str, rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            rule,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.field, self.message, self.rule)
    }
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        ConfigError::Validation(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ConfigError::Deserialization(err.to_string())
        } else {
            ConfigError::Serialization(err.to_string())
        }
    }
}

/// Settings that can check their own consistency.
pub trait Validate {
    /// Returns every broken rule, or an empty vector if the settings are usable.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if no rule is broken.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Folds the broken rules into a single [`ConfigError`].
    fn validate_or_error(&self) -> ConfigResult<()> {
        let errors = self.validate();
        if errors.len() > 1 {
            return Err(ConfigError::MultipleValidationErrors(errors));
        }
        match errors.into_iter().next() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("decimal_places", "max_precision", "Too many");
        assert_eq!(err.to_string(), "decimal_places: Too many [max_precision]");
        assert_eq!(
            ConfigError::from(err).to_string(),
            "Validation error: decimal_places: Too many [max_precision]"
        );
    }

    #[test]
    fn test_multiple_errors_display() {
        let err = ConfigError::MultipleValidationErrors(vec![
            ValidationError::new("never_label", "non_empty", "Label cannot be empty"),
            ValidationError::new("days_per_month", "positive_days", "Must be positive"),
        ]);
        assert_eq!(
            err.to_string(),
            "2 validation errors: never_label: Label cannot be empty [non_empty]; \
             days_per_month: Must be positive [positive_days]"
        );
    }

    #[test]
    fn test_json_error_is_deserialization() {
        let err: ConfigError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }
}
