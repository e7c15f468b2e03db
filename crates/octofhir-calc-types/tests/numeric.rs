//! Numeric parsing, rounding and severity banding

use octofhir_calc_types::*;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case("120", 120.0)]
#[case("  86.5 ", 86.5)]
#[case("3,5", 3.5)]
#[case(".5", 0.5)]
#[case("-4", -4.0)]
#[case("1e3", 1000.0)]
#[case("72bpm", 72.0)]
#[case("120 mmHg", 120.0)]
fn test_parse_number(#[case] raw: &str, #[case] expected: f64) {
    assert_eq!(parse_number(raw), expected);
}

/// Commas are decimal commas, never thousands separators
#[rstest]
#[case("1,000", 1.0)]
#[case("1,000,000", 1.0)]
#[case("2,50", 2.5)]
#[case("1.5,2", 1.5)]
fn test_parse_number_comma_is_never_grouping(#[case] raw: &str, #[case] expected: f64) {
    assert_eq!(parse_number(raw), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("abc")]
#[case("-")]
#[case(".")]
fn test_parse_number_rejects(#[case] raw: &str) {
    assert!(parse_number(raw).is_nan());
}

#[rstest]
#[case(86.66666, 1, "86.7")]
#[case(2.5, 0, "3")]
#[case(-2.5, 0, "-3")]
#[case(1.0, 2, "1")]
#[case(-0.04, 1, "0")]
#[case(0.504, 2, "0.5")]
fn test_round_and_format(#[case] n: f64, #[case] digits: i32, #[case] expected: &str) {
    assert_eq!(format_number(round(n, digits)), expected);
}

const FALLING: SeverityScale = SeverityScale::new(&[
    Band::below(60.0, Severity::Critical),
    Band::below(65.0, Severity::High),
    Band::below(70.0, Severity::Borderline),
]);

#[rstest]
#[case(59.9, Severity::Critical)]
#[case(60.0, Severity::High)]
#[case(64.9, Severity::High)]
#[case(65.0, Severity::Borderline)]
#[case(70.0, Severity::Ok)]
#[case(f64::NAN, Severity::Ok)]
fn test_band_edges(#[case] value: f64, #[case] expected: Severity) {
    assert_eq!(FALLING.classify(value), expected);
}

proptest! {
    #[test]
    fn prop_parse_never_infinite(raw in ".{0,24}") {
        let n = parse_number(&raw);
        prop_assert!(n.is_finite() || n.is_nan());
    }

    #[test]
    fn prop_integers_parse_exactly(n in -1_000_000i64..1_000_000) {
        prop_assert_eq!(parse_number(&n.to_string()), n as f64);
    }

    #[test]
    fn prop_round_is_stable(n in -1.0e6f64..1.0e6, digits in 0i32..3) {
        let once = round(n, digits);
        prop_assert_eq!(round(once, digits), once);
    }

    #[test]
    fn prop_clamp_stays_in_range(n in any::<f64>(), lo in -100.0f64..0.0, hi in 0.0f64..100.0) {
        let clamped = clamp(n, lo, hi);
        prop_assert!(clamped.is_nan() || (lo..=hi).contains(&clamped));
    }
}
