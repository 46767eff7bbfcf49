//! # Recoup Analytics
//!
//! Investment-return metrics and their display strings.
//!
//! This crate holds the calculation and presentation logic of Recoup:
//! - **Payback**: [`calc_payback`], the number of periods needed to break even
//! - **ROI**: [`calc_roi`], return on investment in percent
//! - **Formatting**: [`format_roi`] and [`format_payback_period`]
//! - **Projection**: cumulative revenue under compounding monthly growth
//! - **Summary**: [`analyze`], validated input to a ready-to-display report
//!
//! ## Architecture
//!
//! Calculations return raw `f64`-backed types from `recoup-core`. Rounding
//! only happens inside the formatting functions, so callers and tests can
//! inspect exact results independently of how they are shown.
//!
//! ## Usage
//!
//! ```rust
//! use recoup_analytics::prelude::*;
//!
//! let payback = calc_payback(1000.0, 2000.0);
//! assert_eq!(payback, Payback::Finite(1.0));
//! assert_eq!(format_payback_period(payback), "1.0 months");
//! assert_eq!(format_roi(150.5), "2.5x return (150.5%)");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]

pub mod config;
pub mod error;
pub mod formatting;
pub mod payback;
pub mod projection;
pub mod roi;
pub mod summary;

pub use error::{AnalyticsError, AnalyticsResult};
pub use formatting::{
    format_payback_period, format_payback_period_with, format_roi, format_roi_with,
};
pub use payback::calc_payback;
pub use roi::calc_roi;
pub use summary::{analyze, analyze_with, InvestmentInput, InvestmentSummary};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{ConfigError, FormatConfig, Validate};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::formatting::{
        format_payback_period, format_payback_period_with, format_roi, format_roi_with,
    };
    pub use crate::payback::calc_payback;
    pub use crate::projection::{checked_projected_revenue, projected_revenue};
    pub use crate::roi::calc_roi;
    pub use crate::summary::{analyze, analyze_with, InvestmentInput, InvestmentSummary};
    pub use recoup_core::types::{Payback, PaybackPeriod, Roi};
    pub use recoup_math::series::sum_geometric;
}
