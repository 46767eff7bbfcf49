//! Payback ratio type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of a payback calculation.
///
/// A payback is either a finite, non-negative number of periods needed to
/// break even, or the no-recoup marker when the investment never pays back
/// (exact break-even or a loss per period).
///
/// # Example
///
/// ```rust
/// use recoup_core::types::Payback;
///
/// let payback = Payback::Finite(2.0);
/// assert_eq!(payback.as_finite(), Some(2.0));
/// assert!(Payback::NeverRecoups.is_never());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Payback {
    /// Number of periods until cumulative profit covers the cost.
    Finite(f64),
    /// Profit per period is zero or negative; the cost is never recovered.
    NeverRecoups,
}

impl Payback {
    /// Payback of zero periods (nothing to recover).
    pub const IMMEDIATE: Self = Self::Finite(0.0);

    /// Returns the number of periods, or `None` for the no-recoup marker.
    #[must_use]
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            Self::Finite(periods) => Some(*periods),
            Self::NeverRecoups => None,
        }
    }

    /// Returns true if the investment never pays back.
    #[must_use]
    pub fn is_never(&self) -> bool {
        matches!(self, Self::NeverRecoups)
    }

    /// Returns true if the payback is exactly zero periods.
    #[must_use]
    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Finite(periods) if *periods == 0.0)
    }
}

impl From<Option<f64>> for Payback {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::NeverRecoups, Self::Finite)
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(periods) => write!(f, "{periods}"),
            Self::NeverRecoups => write!(f, "never"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_finite() {
        assert_eq!(Payback::Finite(1.0).as_finite(), Some(1.0));
        assert_eq!(Payback::NeverRecoups.as_finite(), None);
    }

    #[test]
    fn test_immediate() {
        assert!(Payback::IMMEDIATE.is_immediate());
        assert!(Payback::Finite(-0.0).is_immediate());
        assert!(!Payback::Finite(0.5).is_immediate());
        assert!(!Payback::NeverRecoups.is_immediate());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Payback::from(Some(3.0)), Payback::Finite(3.0));
        assert_eq!(Payback::from(None), Payback::NeverRecoups);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Payback::Finite(1.5)).unwrap();
        assert_eq!(json, r#"{"kind":"finite","value":1.5}"#);

        let never: Payback = serde_json::from_str(r#"{"kind":"never_recoups"}"#).unwrap();
        assert_eq!(never, Payback::NeverRecoups);
    }

    #[test]
    fn test_display() {
        assert_eq!(Payback::Finite(2.5).to_string(), "2.5");
        assert_eq!(Payback::NeverRecoups.to_string(), "never");
    }
}
