//! Display rounding.
//!
//! Rounds the exact binary value of an `f64` to a fixed number of decimal
//! places, with ties going away from zero. Working from the exact value means
//! `2.505` (stored as `2.50499999...`) rounds to `2.5`, while a true tie such
//! as `0.25` rounds to `0.3`.
//!
//! `rust_decimal` carries the exact value; anything it cannot hold (non-finite
//! values and magnitudes above ~7.9e28) falls back to the standard formatter.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

fn to_rounded_decimal(value: f64, decimal_places: u32) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    // -0.0 and tiny negatives that round to zero from a non-negative input
    if rounded.is_zero() && value >= 0.0 {
        rounded.set_sign_positive(true);
    }
    Some(rounded)
}

/// Rounds `value` to `decimal_places`, ties away from zero.
///
/// # Example
///
/// ```rust
/// use recoup_math::rounding::round_half_away;
///
/// assert_eq!(round_half_away(0.25, 1), 0.3);
/// assert_eq!(round_half_away(-0.25, 1), -0.3);
/// assert_eq!(round_half_away(150.5, 0), 151.0);
/// ```
pub fn round_half_away(value: f64, decimal_places: u32) -> f64 {
    to_rounded_decimal(value, decimal_places)
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Formats `value` with exactly `decimal_places` digits after the point.
///
/// # Example
///
/// ```rust
/// use recoup_math::rounding::format_fixed;
///
/// assert_eq!(format_fixed(150.5, 1), "150.5");
/// assert_eq!(format_fixed(2.0, 1), "2.0");
/// assert_eq!(format_fixed(2.505, 1), "2.5");
/// ```
pub fn format_fixed(value: f64, decimal_places: u32) -> String {
    let precision = decimal_places as usize;
    match to_rounded_decimal(value, decimal_places) {
        Some(rounded) => format!("{:.*}", precision, rounded),
        None => format!("{:.*}", precision, value),
    }
}
