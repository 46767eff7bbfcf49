//! # Recoup
//!
//! Payback period and return-on-investment metrics with their display strings.
//!
//! This facade re-exports the public API of the workspace crates:
//!
//! - [`recoup_core`]: `Payback`, `Roi`, `PaybackPeriod` and `RecoupError`
//! - [`recoup_math`]: geometric series sums and display rounding
//! - [`recoup_analytics`]: calculations, formatting, configuration and summaries
//!
//! ```rust
//! use recoup::prelude::*;
//!
//! assert_eq!(calc_payback(1000.0, 500.0), Payback::NeverRecoups);
//! assert_eq!(format_roi(Roi::Unbounded), "∞");
//! assert_eq!(format_payback_period(0.5), "15 days");
//! assert_eq!(sum_geometric(0.0, 12), 12.0);
//! ```

#![warn(missing_docs)]

pub use recoup_analytics;
pub use recoup_core;
pub use recoup_math;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use recoup_analytics::prelude::*;
    pub use recoup_core::prelude::*;
    pub use recoup_math::prelude::*;
}
