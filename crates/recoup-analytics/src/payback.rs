//! Payback calculation.

use recoup_core::types::Payback;

/// Calculates the payback ratio `cost / (revenue - cost)`.
///
/// When `revenue` is a per-month figure the ratio reads as a month count.
///
/// - `cost == 0`: immediate payback, `Finite(0.0)`, whatever the revenue
/// - `revenue == cost`: zero net gain per period, `NeverRecoups`
/// - `revenue < cost`: a loss per period, `NeverRecoups`
/// - otherwise a finite positive ratio
///
/// Inputs are not validated; see [`InvestmentInput::validate`](crate::summary::InvestmentInput::validate).
///
/// # Example
///
/// ```rust
/// use recoup_analytics::calc_payback;
/// use recoup_core::types::Payback;
///
/// assert_eq!(calc_payback(0.0, 1000.0), Payback::Finite(0.0));
/// assert_eq!(calc_payback(1000.0, 1000.0), Payback::NeverRecoups);
/// assert_eq!(calc_payback(1000.0, 2000.0), Payback::Finite(1.0));
/// ```
pub fn calc_payback(cost: f64, revenue: f64) -> Payback {
    if cost == 0.0 {
        return Payback::IMMEDIATE;
    }
    if revenue == cost {
        log::trace!("break-even at cost {}: payback never completes", cost);
        return Payback::NeverRecoups;
    }
    if revenue < cost {
        log::trace!("revenue {} below cost {}: payback never completes", revenue, cost);
        return Payback::NeverRecoups;
    }
    Payback::Finite(cost / (revenue - cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_zero_cost_is_immediate() {
        assert_eq!(calc_payback(0.0, 1000.0), Payback::Finite(0.0));
        assert_eq!(calc_payback(0.0, 0.0), Payback::Finite(0.0));
    }

    #[test]
    fn test_break_even_never_recoups() {
        assert_eq!(calc_payback(1000.0, 1000.0), Payback::NeverRecoups);
    }

    #[test]
    fn test_loss_never_recoups() {
        assert_eq!(calc_payback(1000.0, 500.0), Payback::NeverRecoups);
    }

    #[test]
    fn test_profitable() {
        assert_eq!(calc_payback(1000.0, 2000.0), Payback::Finite(1.0));
        assert_eq!(calc_payback(1000.0, 1500.0), Payback::Finite(2.0));
        assert_eq!(calc_payback(1000.0, 5000.0), Payback::Finite(0.25));
    }

    #[test]
    fn test_thin_margin_is_long_payback() {
        let payback = calc_payback(1000.0, 1001.0).as_finite().unwrap();
        assert_relative_eq!(payback, 1000.0, epsilon = 1e-9);
    }

    proptest! {
        #[test]
        fn prop_zero_cost_always_immediate(revenue in -1e9f64..1e9) {
            prop_assert_eq!(calc_payback(0.0, revenue), Payback::Finite(0.0));
        }

        #[test]
        fn prop_no_gain_never_recoups(cost in 1e-6f64..1e9, shortfall in 0.0f64..1.0) {
            let revenue = cost * (1.0 - shortfall);
            prop_assert_eq!(calc_payback(cost, revenue), Payback::NeverRecoups);
        }

        #[test]
        fn prop_gain_gives_positive_ratio(cost in 1e-3f64..1e6, gain in 1e-3f64..1e6) {
            let revenue = cost + gain;
            let payback = calc_payback(cost, revenue);
            prop_assert_eq!(payback, Payback::Finite(cost / (revenue - cost)));
            prop_assert!(payback.as_finite().unwrap() > 0.0);
        }
    }
}
