//! Revenue projection under compounding growth.

use recoup_core::error::RecoupError;
use recoup_math::series::{checked_sum_geometric, sum_geometric};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Cumulative revenue over `months` when monthly revenue grows by
/// `growth_rate` each month, starting at `monthly_revenue`.
///
/// ```text
/// R × Σ_{i=0}^{n-1} (1 + g)^i
/// ```
///
/// # Example
///
/// ```rust
/// use recoup_analytics::projection::projected_revenue;
///
/// assert_eq!(projected_revenue(500.0, 0.0, 12), 6000.0);
/// ```
pub fn projected_revenue(monthly_revenue: f64, growth_rate: f64, months: u32) -> f64 {
    monthly_revenue * sum_geometric(growth_rate, months)
}

/// Validated variant of [`projected_revenue`].
///
/// Fails for a non-finite revenue, a growth rate that is not finite or is
/// below -100% ([`RecoupError::InvalidRate`]), or a projection that overflows
/// ([`MathError::Overflow`](recoup_math::error::MathError::Overflow)).
pub fn checked_projected_revenue(
    monthly_revenue: f64,
    growth_rate: f64,
    months: u32,
) -> AnalyticsResult<f64> {
    if !monthly_revenue.is_finite() {
        return Err(AnalyticsError::InvalidInput(format!(
            "monthly revenue must be finite, got {monthly_revenue}"
        )));
    }
    if !growth_rate.is_finite() {
        log::warn!("rejecting non-finite growth rate {}", growth_rate);
        return Err(RecoupError::invalid_rate(growth_rate, "growth rate must be finite").into());
    }
    if growth_rate < -1.0 {
        log::warn!("rejecting growth rate {} below -100%", growth_rate);
        return Err(RecoupError::invalid_rate(growth_rate, "growth rate is below -100%").into());
    }
    let factor = checked_sum_geometric(growth_rate, months)?;
    Ok(monthly_revenue * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_revenue() {
        assert_eq!(projected_revenue(1000.0, 0.0, 12), 12_000.0);
        assert_eq!(projected_revenue(1000.0, 0.0, 0), 0.0);
    }

    #[test]
    fn test_growing_revenue() {
        // 100 + 110 + 121
        assert_relative_eq!(projected_revenue(100.0, 0.1, 3), 331.0, epsilon = 1e-9);
    }

    #[test]
    fn test_checked_rejects_bad_growth_rate() {
        for rate in [f64::NAN, f64::INFINITY, -1.5] {
            let err = checked_projected_revenue(100.0, rate, 3).unwrap_err();
            assert!(
                matches!(err, AnalyticsError::Core(RecoupError::InvalidRate { .. })),
                "rate {rate}: {err:?}"
            );
        }
    }

    #[test]
    fn test_checked_accepts_total_loss_rate() {
        // -100% growth: only the first month earns anything
        assert_eq!(checked_projected_revenue(100.0, -1.0, 5).unwrap(), 100.0);
    }

    #[test]
    fn test_checked_propagates_overflow() {
        let err = checked_projected_revenue(100.0, 10.0, 1000).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::Math(recoup_math::error::MathError::Overflow { .. })
        ));
    }

    #[test]
    fn test_checked_rejects_non_finite_revenue() {
        let err = checked_projected_revenue(f64::INFINITY, 0.1, 3).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(_)));
    }

    #[test]
    fn test_checked_matches_unchecked() {
        let checked = checked_projected_revenue(250.0, 0.02, 24).unwrap();
        assert_eq!(checked, projected_revenue(250.0, 0.02, 24));
    }
}
