//! Integration tests driven by the reference scenario fixture.
//!
//! Each section of `fixtures/reference_scenarios.json` pins one public
//! operation to its expected output.

use recoup_analytics::{calc_payback, format_payback_period, format_roi};
use recoup_core::types::{Payback, PaybackPeriod, Roi};
use recoup_math::series::sum_geometric;
use serde::Deserialize;
use std::fs;

/// Path to the reference scenarios, relative to the crate root
const REFERENCE_FILE: &str = "tests/fixtures/reference_scenarios.json";

// ============================================================================
// JSON Structures for Test Data
// ============================================================================

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // metadata is informational
struct Fixture {
    metadata: serde_json::Value,
    payback: Vec<PaybackCase>,
    roi_formatting: Vec<RoiFormatCase>,
    payback_formatting: Vec<PeriodFormatCase>,
    geometric: Vec<GeometricCase>,
}

#[derive(Debug, Deserialize)]
struct PaybackCase {
    name: String,
    cost: f64,
    revenue: f64,
    expected: Payback,
}

#[derive(Debug, Deserialize)]
struct RoiFormatCase {
    roi: Roi,
    expected: String,
}

#[derive(Debug, Deserialize)]
struct PeriodFormatCase {
    period: PaybackPeriod,
    expected: String,
}

#[derive(Debug, Deserialize)]
struct GeometricCase {
    rate: f64,
    periods: u32,
    expected: f64,
    tolerance: f64,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn load_fixture() -> Fixture {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(REFERENCE_FILE);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content).expect("Failed to parse reference scenarios")
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_payback_scenarios() {
    let fixture = load_fixture();
    assert!(!fixture.payback.is_empty());

    for case in &fixture.payback {
        assert_eq!(
            calc_payback(case.cost, case.revenue),
            case.expected,
            "payback scenario '{}'",
            case.name
        );
    }
}

#[test]
fn test_roi_formatting_scenarios() {
    let fixture = load_fixture();

    for case in &fixture.roi_formatting {
        assert_eq!(format_roi(case.roi), case.expected, "roi {:?}", case.roi);
    }
}

#[test]
fn test_payback_formatting_scenarios() {
    let fixture = load_fixture();

    for case in &fixture.payback_formatting {
        assert_eq!(
            format_payback_period(case.period),
            case.expected,
            "period {:?}",
            case.period
        );
    }
}

#[test]
fn test_geometric_scenarios() {
    let fixture = load_fixture();

    for case in &fixture.geometric {
        let actual = sum_geometric(case.rate, case.periods);
        assert!(
            (actual - case.expected).abs() <= case.tolerance,
            "sum_geometric({}, {}) = {}, expected {}",
            case.rate,
            case.periods,
            actual,
            case.expected
        );
    }
}

#[test]
fn test_payback_feeds_formatting() {
    // calc_payback output goes straight into the display layer
    assert_eq!(format_payback_period(calc_payback(0.0, 1000.0)), "Immediate");
    assert_eq!(format_payback_period(calc_payback(1000.0, 1000.0)), "Never");
    assert_eq!(format_payback_period(calc_payback(1000.0, 500.0)), "Never");
    assert_eq!(format_payback_period(calc_payback(1000.0, 2000.0)), "1.0 months");
    assert_eq!(format_payback_period(calc_payback(1000.0, 3000.0)), "15 days");
}
