//! Domain types for investment-return metrics.
//!
//! This module provides type-safe representations of the metric results:
//!
//! - [`Payback`]: Payback ratio, or the no-recoup marker
//! - [`Roi`]: ROI percentage, or the unbounded marker
//! - [`PaybackPeriod`]: Display input for a payback duration in months

mod payback;
mod period;
mod roi;

pub use payback::Payback;
pub use period::PaybackPeriod;
pub use roi::Roi;
