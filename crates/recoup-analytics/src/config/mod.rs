//! Display configuration.
//!
//! [`FormatConfig`] controls precision, the month-to-day approximation and
//! the labels used by the formatting functions. The default configuration
//! produces the canonical strings (`"Never"`, `"Immediate"`, `"∞"`, one
//! decimal place, 30-day months).
//!
//! ```rust
//! use recoup_analytics::config::{FormatConfig, Validate, MAX_DECIMAL_PLACES};
//!
//! let config = FormatConfig::from_json(r#"{ "decimal_places": 2 }"#).unwrap();
//! assert_eq!(config.decimal_places, 2);
//! assert_eq!(config.days_per_month, 30.0);
//! assert!(config.is_valid());
//!
//! let too_precise = config.with_decimal_places(MAX_DECIMAL_PLACES + 1);
//! assert!(!too_precise.is_valid());
//! ```

mod error;
mod format;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use format::{FormatConfig, MAX_DECIMAL_PLACES};
