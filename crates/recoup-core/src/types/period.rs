//! Payback period display input.

use serde::{Deserialize, Serialize};

use super::Payback;

/// A payback duration as handed to the display layer.
///
/// `NeverRecoups` and `NotProvided` render identically, but stay separate so
/// callers can tell "we computed it and it never pays back" apart from
/// "nothing was computed".
///
/// # Example
///
/// ```rust
/// use recoup_core::types::{Payback, PaybackPeriod};
///
/// assert_eq!(PaybackPeriod::from(Payback::Finite(0.5)), PaybackPeriod::Months(0.5));
/// assert_eq!(PaybackPeriod::from(Payback::NeverRecoups), PaybackPeriod::NeverRecoups);
/// assert_eq!(PaybackPeriod::default(), PaybackPeriod::NotProvided);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PaybackPeriod {
    /// Elapsed time in months.
    Months(f64),
    /// The investment never pays back.
    NeverRecoups,
    /// No payback value was supplied.
    #[default]
    NotProvided,
}

impl PaybackPeriod {
    /// Returns the month count, if any.
    #[must_use]
    pub fn months(&self) -> Option<f64> {
        match self {
            Self::Months(months) => Some(*months),
            Self::NeverRecoups | Self::NotProvided => None,
        }
    }

    /// Returns true for both the never and not-provided states.
    #[must_use]
    pub fn is_never(&self) -> bool {
        self.months().is_none()
    }
}

impl From<f64> for PaybackPeriod {
    fn from(months: f64) -> Self {
        Self::Months(months)
    }
}

impl From<Payback> for PaybackPeriod {
    fn from(payback: Payback) -> Self {
        match payback {
            Payback::Finite(months) => Self::Months(months),
            Payback::NeverRecoups => Self::NeverRecoups,
        }
    }
}

impl From<Option<Payback>> for PaybackPeriod {
    fn from(payback: Option<Payback>) -> Self {
        payback.map_or(Self::NotProvided, Self::from)
    }
}
