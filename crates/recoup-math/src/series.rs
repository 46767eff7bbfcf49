//! Geometric series sums.
//!
//! The sum of `periods` terms of a series whose ratio is `1 + rate`:
//!
//! ```text
//! S(r, n) = Σ_{i=0}^{n-1} (1 + r)^i = ((1 + r)^n - 1) / r
//! ```
//!
//! This is the accumulation factor behind compounding revenue and annuity
//! future values.

use crate::error::{MathError, MathResult};

/// Sums a geometric series with ratio `1 + rate` over `periods` terms.
///
/// A rate of exactly zero returns `periods` directly: every term is one and
/// the closed form would divide by zero. Any other rate uses the closed form.
///
/// Rates very close to (but not exactly) zero go through the closed form and
/// can lose precision; only the exact zero is special-cased.
///
/// # Arguments
///
/// * `rate` - Per-period growth rate (0.1 = 10%)
/// * `periods` - Number of terms
///
/// # Example
///
/// ```rust
/// use recoup_math::series::sum_geometric;
///
/// assert_eq!(sum_geometric(0.0, 12), 12.0);
/// assert_eq!(sum_geometric(0.1, 12), (1.1_f64.powf(12.0) - 1.0) / 0.1);
/// ```
pub fn sum_geometric(rate: f64, periods: u32) -> f64 {
    let n = f64::from(periods);
    if rate == 0.0 {
        return n;
    }
    ((1.0 + rate).powf(n) - 1.0) / rate
}

/// Validated variant of [`sum_geometric`].
///
/// Rejects non-finite rates and rates below -1 (a negative growth factor),
/// and reports overflow when the sum is not finite.
///
/// # Example
///
/// ```rust
/// use recoup_math::series::checked_sum_geometric;
///
/// assert_eq!(checked_sum_geometric(0.0, 6).unwrap(), 6.0);
/// assert!(checked_sum_geometric(f64::NAN, 6).is_err());
/// ```
pub fn checked_sum_geometric(rate: f64, periods: u32) -> MathResult<f64> {
    if !rate.is_finite() {
        log::warn!("rejecting non-finite growth rate {}", rate);
        return Err(MathError::invalid_input(format!(
            "growth rate must be finite, got {}",
            rate
        )));
    }
    if rate < -1.0 {
        log::warn!("rejecting growth rate {} below -100%", rate);
        return Err(MathError::invalid_input(format!(
            "growth rate must be at least -1, got {}",
            rate
        )));
    }

    let sum = sum_geometric(rate, periods);
    if !sum.is_finite() {
        log::warn!("geometric sum overflowed (rate {}, periods {})", rate, periods);
        return Err(MathError::overflow("sum_geometric"));
    }
    Ok(sum)
}
