//! Display strings for ROI and payback periods.
//!
//! All rounding here is presentation only: percentages, multiples and months
//! are rounded half away from zero to [`FormatConfig::decimal_places`], and
//! sub-month paybacks become a whole number of days.

use recoup_core::types::{PaybackPeriod, Roi};
use recoup_math::rounding::format_fixed;

use crate::config::FormatConfig;

/// Formats an ROI with the default configuration.
///
/// - [`Roi::Unbounded`] renders as `"∞"`
/// - above 100%: `"<multiple>x return (<roi>%)"` where `multiple = roi / 100 + 1`
/// - otherwise: `"<roi>%"`
///
/// # Example
///
/// ```rust
/// use recoup_analytics::format_roi;
/// use recoup_core::types::Roi;
///
/// assert_eq!(format_roi(Roi::Unbounded), "∞");
/// assert_eq!(format_roi(50.5), "50.5%");
/// assert_eq!(format_roi(150.5), "2.5x return (150.5%)");
/// ```
pub fn format_roi(roi: impl Into<Roi>) -> String {
    format_roi_with(roi, &FormatConfig::default())
}

/// Formats an ROI using the given configuration.
pub fn format_roi_with(roi: impl Into<Roi>, config: &FormatConfig) -> String {
    let places = config.decimal_places;
    match roi.into() {
        Roi::Unbounded => config.unbounded_symbol.clone(),
        Roi::Percent(pct) if pct > config.multiple_threshold => {
            let multiple = pct / 100.0 + 1.0;
            format!(
                "{}x return ({}%)",
                format_fixed(multiple, places),
                format_fixed(pct, places)
            )
        }
        Roi::Percent(pct) => format!("{}%", format_fixed(pct, places)),
    }
}

/// Formats a payback period with the default configuration.
///
/// - never recoups or not provided: `"Never"`
/// - exactly zero: `"Immediate"`
/// - under one month: `"<round(months × 30)> days"`
/// - otherwise: `"<months> months"`
///
/// Accepts anything convertible into a [`PaybackPeriod`], including a raw
/// month count, a [`Payback`](recoup_core::types::Payback) or an
/// `Option<Payback>`.
///
/// # Example
///
/// ```rust
/// use recoup_analytics::format_payback_period;
/// use recoup_core::types::PaybackPeriod;
///
/// assert_eq!(format_payback_period(PaybackPeriod::NotProvided), "Never");
/// assert_eq!(format_payback_period(0.0), "Immediate");
/// assert_eq!(format_payback_period(0.5), "15 days");
/// assert_eq!(format_payback_period(1.5), "1.5 months");
/// ```
pub fn format_payback_period(period: impl Into<PaybackPeriod>) -> String {
    format_payback_period_with(period, &FormatConfig::default())
}

/// Formats a payback period using the given configuration.
pub fn format_payback_period_with(
    period: impl Into<PaybackPeriod>,
    config: &FormatConfig,
) -> String {
    match period.into() {
        PaybackPeriod::NeverRecoups | PaybackPeriod::NotProvided => config.never_label.clone(),
        PaybackPeriod::Months(months) if months == 0.0 => config.immediate_label.clone(),
        PaybackPeriod::Months(months) if months < 1.0 => {
            let days = (months * config.days_per_month).round() as i64;
            format!("{days} days")
        }
        PaybackPeriod::Months(months) => {
            format!("{} months", format_fixed(months, config.decimal_places))
        }
    }
}
