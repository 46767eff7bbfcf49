//! # Recoup Core
//!
//! Core types and error handling for the Recoup investment-return metrics library.
//!
//! This crate provides the foundational building blocks used throughout Recoup:
//!
//! - **Types**: [`Payback`], [`Roi`] and [`PaybackPeriod`], sum types that keep
//!   "never recoups" and "not provided" apart from real numbers
//! - **Errors**: [`RecoupError`] for the optional input validation layer
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Sentinel states are enum variants, not magic numbers
//! - **Explicit Over Implicit**: Callers say what a missing value means
//!
//! ## Example
//!
//! ```rust
//! use recoup_core::prelude::*;
//!
//! let payback = Payback::Finite(1.5);
//! assert_eq!(PaybackPeriod::from(payback), PaybackPeriod::Months(1.5));
//! assert_eq!(PaybackPeriod::from(None::<Payback>), PaybackPeriod::NotProvided);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{RecoupError, RecoupResult};
    pub use crate::types::{Payback, PaybackPeriod, Roi};
}

// Re-export commonly used types at crate root
pub use error::{RecoupError, RecoupResult};
pub use types::{Payback, PaybackPeriod, Roi};
