//! Return-on-investment calculation.

use recoup_core::types::Roi;

/// Calculates ROI in percent: `(revenue - cost) / cost × 100`.
///
/// A zero cost has no finite ROI and returns [`Roi::Unbounded`]. Losses give
/// a negative percentage.
///
/// # Example
///
/// ```rust
/// use recoup_analytics::calc_roi;
/// use recoup_core::types::Roi;
///
/// assert_eq!(calc_roi(1000.0, 2500.0), Roi::Percent(150.0));
/// assert_eq!(calc_roi(0.0, 100.0), Roi::Unbounded);
/// ```
pub fn calc_roi(cost: f64, revenue: f64) -> Roi {
    if cost == 0.0 {
        log::trace!("zero cost: ROI is unbounded");
        return Roi::Unbounded;
    }
    Roi::Percent((revenue - cost) / cost * 100.0)
}
