//! Investment summary.
//!
//! Bundles the payback and ROI of one investment together with their display
//! strings, for callers that render a report in one go.

use recoup_core::types::{Payback, Roi};
use recoup_core::RecoupError;
use serde::{Deserialize, Serialize};

use crate::config::{FormatConfig, Validate};
use crate::error::AnalyticsResult;
use crate::formatting::{format_payback_period_with, format_roi_with};
use crate::payback::calc_payback;
use crate::roi::calc_roi;

/// Cost and monthly revenue of an investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// Up-front cost.
    pub cost: f64,
    /// Revenue per month.
    pub monthly_revenue: f64,
}

impl InvestmentInput {
    /// Creates a new input.
    #[must_use]
    pub fn new(cost: f64, monthly_revenue: f64) -> Self {
        Self {
            cost,
            monthly_revenue,
        }
    }

    /// Checks that both amounts are finite and non-negative.
    pub fn validate(&self) -> AnalyticsResult<()> {
        for (field, value) in [
            ("cost", self.cost),
            ("monthly_revenue", self.monthly_revenue),
        ] {
            if !value.is_finite() {
                return Err(
                    RecoupError::invalid_amount(field, value, "must be a finite number").into(),
                );
            }
            if value < 0.0 {
                return Err(
                    RecoupError::invalid_amount(field, value, "must not be negative").into(),
                );
            }
        }
        Ok(())
    }
}

/// Metrics of an investment and how to display them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    /// Months until the cost is recovered.
    pub payback: Payback,
    /// Return on investment.
    pub roi: Roi,
    /// Display form of `payback`.
    pub payback_display: String,
    /// Display form of `roi`.
    pub roi_display: String,
}

/// Validates `input` and summarises it with the default display settings.
///
/// # Example
///
/// ```rust
/// use recoup_analytics::{analyze, InvestmentInput};
///
/// let summary = analyze(&InvestmentInput::new(1000.0, 2000.0)).unwrap();
/// assert_eq!(summary.payback_display, "1.0 months");
/// assert_eq!(summary.roi_display, "100.0%");
/// ```
pub fn analyze(input: &InvestmentInput) -> AnalyticsResult<InvestmentSummary> {
    analyze_with(input, &FormatConfig::default())
}

/// Validates `input` and `config`, then summarises the investment.
pub fn analyze_with(
    input: &InvestmentInput,
    config: &FormatConfig,
) -> AnalyticsResult<InvestmentSummary> {
    input.validate()?;
    config.validate_or_error()?;

    let payback = calc_payback(input.cost, input.monthly_revenue);
    let roi = calc_roi(input.cost, input.monthly_revenue);
    log::debug!(
        "analyzed cost={} revenue={}: payback={} roi={}",
        input.cost,
        input.monthly_revenue,
        payback,
        roi
    );

    Ok(InvestmentSummary {
        payback,
        roi,
        payback_display: format_payback_period_with(payback, config),
        roi_display: format_roi_with(roi, config),
    })
}
