//! Formatting configuration types.

use serde::{Deserialize, Serialize};

use super::error::{ConfigResult, Validate, ValidationError};

/// Largest supported number of decimal places.
pub const MAX_DECIMAL_PLACES: u32 = 10;

/// ROI of an investment that returns nothing.
const TOTAL_LOSS_PERCENT: f64 = -100.0;

// =============================================================================
// FORMAT CONFIGURATION
// =============================================================================

/// Display settings for ROI and payback strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Digits after the decimal point for percentages, multiples and months.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,

    /// Days in a month when a payback shorter than one month is shown in days.
    #[serde(default = "default_days_per_month")]
    pub days_per_month: f64,

    /// ROI percentage above which the "Nx return" form is used.
    #[serde(default = "default_multiple_threshold")]
    pub multiple_threshold: f64,

    /// Text for a payback that never completes or was not provided.
    #[serde(default = "default_never_label")]
    pub never_label: String,

    /// Text for a zero-month payback.
    #[serde(default = "default_immediate_label")]
    pub immediate_label: String,

    /// Text for an ROI with no finite value.
    #[serde(default = "default_unbounded_symbol")]
    pub unbounded_symbol: String,
}

fn default_decimal_places() -> u32 {
    1
}

fn default_days_per_month() -> f64 {
    30.0
}

fn default_multiple_threshold() -> f64 {
    100.0
}

fn default_never_label() -> String {
    "Never".to_string()
}

fn default_immediate_label() -> String {
    "Immediate".to_string()
}

fn default_unbounded_symbol() -> String {
    "∞".to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatConfig {
    /// Creates the canonical display configuration.
    pub fn new() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            days_per_month: default_days_per_month(),
            multiple_threshold: default_multiple_threshold(),
            never_label: default_never_label(),
            immediate_label: default_immediate_label(),
            unbounded_symbol: default_unbounded_symbol(),
        }
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builder method to set decimal places.
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Builder method to set days per month.
    pub fn with_days_per_month(mut self, days: f64) -> Self {
        self.days_per_month = days;
        self
    }

    /// Builder method to set the multiple threshold.
    pub fn with_multiple_threshold(mut self, threshold: f64) -> Self {
        self.multiple_threshold = threshold;
        self
    }

    /// Builder method to set the never label.
    pub fn with_never_label(mut self, label: impl Into<String>) -> Self {
        self.never_label = label.into();
        self
    }

    /// Builder method to set the immediate label.
    pub fn with_immediate_label(mut self, label: impl Into<String>) -> Self {
        self.immediate_label = label.into();
        self
    }

    /// Builder method to set the unbounded ROI symbol.
    pub fn with_unbounded_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.unbounded_symbol = symbol.into();
        self
    }
}

impl Validate for FormatConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.decimal_places > MAX_DECIMAL_PLACES {
            errors.push(ValidationError::new(
                "decimal_places",
                "max_precision",
                format!(
                    "Decimal places {} exceeds maximum of {}",
                    self.decimal_places, MAX_DECIMAL_PLACES
                ),
            ));
        }

        if !self.days_per_month.is_finite() || self.days_per_month <= 0.0 {
            errors.push(ValidationError::new(
                "days_per_month",
                "positive_days",
                "Days per month must be a positive number",
            ));
        }

        // -100% is the ROI of a total loss, the lowest reachable value.
        if !self.multiple_threshold.is_finite() || self.multiple_threshold < TOTAL_LOSS_PERCENT {
            errors.push(ValidationError::new(
                "multiple_threshold",
                "min_threshold",
                format!(
                    "Multiple threshold {} must be a finite percentage of at least {}",
                    self.multiple_threshold, TOTAL_LOSS_PERCENT
                ),
            ));
        }

        for (field, label) in [
            ("never_label", &self.never_label),
            ("immediate_label", &self.immediate_label),
            ("unbounded_symbol", &self.unbounded_symbol),
        ] {
            if label.trim().is_empty() {
                errors.push(ValidationError::new(field, "non_empty", "Label cannot be blank"));
            }
        }

        if !self.never_label.trim().is_empty() && self.never_label == self.immediate_label {
            errors.push(ValidationError::new(
                "immediate_label",
                "distinct_labels",
                format!(
                    "Immediate label {:?} must differ from the never label",
                    self.immediate_label
                ),
            ));
        }

        errors
    }
}
