//! # Recoup Math
//!
//! Numeric kernels for the Recoup investment-return metrics library.
//!
//! This crate provides:
//!
//! - **Series**: Closed-form geometric series sums for compounding growth
//! - **Rounding**: Exact half-away-from-zero rounding for display
//!
//! ## Design Philosophy
//!
//! - **Pure Functions**: No state, no I/O, safe to call from any thread
//! - **Raw Results**: Computation never rounds; rounding is a display step

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod rounding;
pub mod series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::rounding::{format_fixed, round_half_away};
    pub use crate::series::{checked_sum_geometric, sum_geometric};
}

pub use error::{MathError, MathResult};
