//! Return-on-investment type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A return on investment, expressed in percent.
///
/// `Percent(50.0)` means the investment returned half of its cost on top of
/// the cost itself. `Unbounded` is the marker for an ROI with no finite value,
/// e.g. when nothing was invested.
///
/// # Example
///
/// ```rust
/// use recoup_core::types::Roi;
///
/// let roi = Roi::from(150.5);
/// assert_eq!(roi.as_percent(), Some(150.5));
/// assert_eq!(Roi::from(None), Roi::Unbounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Roi {
    /// ROI as a percentage of cost (e.g., 150.5 for 150.5%).
    Percent(f64),
    /// No finite ROI exists.
    Unbounded,
}

impl Roi {
    /// Returns the percentage, or `None` when unbounded.
    #[must_use]
    pub fn as_percent(&self) -> Option<f64> {
        match self {
            Self::Percent(pct) => Some(*pct),
            Self::Unbounded => None,
        }
    }

    /// Returns the ROI as a decimal fraction (percentage / 100).
    #[must_use]
    pub fn as_decimal(&self) -> Option<f64> {
        self.as_percent().map(|pct| pct / 100.0)
    }

    /// Returns true if no finite ROI exists.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl From<f64> for Roi {
    fn from(pct: f64) -> Self {
        Self::Percent(pct)
    }
}

impl From<Option<f64>> for Roi {
    fn from(pct: Option<f64>) -> Self {
        pct.map_or(Self::Unbounded, Self::Percent)
    }
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(pct) => write!(f, "{pct}%"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}
