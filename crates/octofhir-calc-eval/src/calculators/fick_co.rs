//! Cardiac output by the Fick principle
//!
//! Oxygen content uses the simplified model `1.34 × Hb × saturation` with no
//! dissolved-oxygen term. The approximation is stated in the result notes.

use super::{finite, informational, measured, rounded};
use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, ResultLine, Severity, Values, clamp, round};

const TITLE: &str = "Fick CO";

/// Hüfner's constant, mL O₂ per g Hb
const HUFNER: f64 = 1.34;

/// Below this BSA the index is not computed
const MIN_BSA: f64 = 0.5;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("vo2", "VO₂ (mL/min)", "250"),
    FieldSpec::number("hb", "Hemoglobin (g/dL)", "12"),
    FieldSpec::number("sao2", "SaO₂ (%)", "98"),
    FieldSpec::number("svo2", "SvO₂ (%)", "65"),
    FieldSpec::number("bsa", "BSA (m²) [optional]", "1.9"),
];

const NOTES: &[&str] = &[
    "Simplified O₂ content: 1.34×Hb×Sat (no dissolved O₂ term).",
    "CO = VO₂ / ((CaO₂−CvO₂)×10).",
];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "fick_co",
    name: "Cardiac Output (Fick)",
    category: "Cardiology",
    tags: &["cath", "hemodynamics", "fick", "co", "ci", "svr"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

/// Interpretation text for the composite output severity
fn interpretation(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "Low output state.",
        Severity::High | Severity::Borderline => "Borderline low output.",
        Severity::Ok => "Normal output.",
    }
}

fn compute(values: &Values) -> CalcResult {
    let vo2 = values.number("vo2");
    let hb = values.number("hb");
    let sao2 = values.number("sao2");
    let svo2 = values.number("svo2");
    let bsa = values.number("bsa");

    if ![vo2, hb, sao2, svo2].iter().all(|n| n.is_finite()) {
        return CalcResult::empty(TITLE);
    }

    let hb = clamp(hb, 3.0, 25.0);
    let arterial_sat = clamp(sao2, 0.0, 100.0) / 100.0;
    let venous_sat = clamp(svo2, 0.0, 100.0) / 100.0;

    let arterial = HUFNER * hb * arterial_sat;
    let venous = HUFNER * hb * venous_sat;
    let delta = arterial - venous;

    if !(delta > 0.0) {
        return CalcResult::new(
            TITLE,
            vec![ResultLine::new("Error", "CaO₂−CvO₂ must be > 0.", Severity::Critical)],
        )
        .with_notes(&["Check SaO₂/SvO₂ and Hb."]);
    }

    let Some(cardiac_output) = finite(vo2 / (delta * 10.0)) else {
        return CalcResult::empty(TITLE);
    };
    let Some(co) = rounded(cardiac_output, 2) else {
        return CalcResult::empty(TITLE);
    };
    let co_line = measured("CO", co, "L/min", &scales::CARDIAC_OUTPUT);

    let ci_line = (bsa > MIN_BSA)
        .then(|| rounded(cardiac_output / bsa, 2))
        .flatten()
        .map(|ci| measured("CI", ci, "L/min/m²", &scales::CARDIAC_INDEX));

    let severity = Severity::worst(
        std::iter::once(co_line.severity).chain(ci_line.as_ref().map(|line| line.severity)),
    );

    let mut lines = vec![
        ResultLine::new("Interpretation", interpretation(severity), severity),
        co_line,
    ];
    lines.extend(ci_line);
    lines.push(informational("CaO₂", round(arterial, 1), "mL/dL"));
    lines.push(informational("CvO₂", round(venous, 1), "mL/dL"));
    lines.push(measured(
        "Δ(O₂ content)",
        round(delta, 1),
        "mL/dL",
        &scales::OXYGEN_CONTENT_DELTA,
    ));

    CalcResult::new(TITLE, lines).with_notes(NOTES)
}

fn copy_text(_values: &Values, result: &CalcResult) -> String {
    let Some(co) = result.line("CO") else {
        // nothing computed, or the single error line
        return match result.hero() {
            Some(line) => format!("{}: {}", TITLE, line.value),
            None => TITLE.to_string(),
        };
    };
    let value = |label: &str| result.line(label).map(|line| line.value.as_str()).unwrap_or("");
    let ci = value("CI");
    let ci = if ci.is_empty() { String::new() } else { format!(", CI {}", ci) };
    format!("Fick CO {}{}. {}", co.value, ci, value("Interpretation"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use octofhir_calc_types::FieldValue;
    use rstest::rstest;

    fn values(vo2: &str, hb: &str, sao2: &str, svo2: &str, bsa: &str) -> Values {
        Values::new()
            .with("vo2", FieldValue::number(vo2))
            .with("hb", FieldValue::number(hb))
            .with("sao2", FieldValue::number(sao2))
            .with("svo2", FieldValue::number(svo2))
            .with("bsa", FieldValue::number(bsa))
    }

    #[test]
    fn test_borderline_index() {
        let v = values("250", "12", "98", "65", "1.9");
        let result = compute(&v);
        let lines: Vec<_> = result
            .lines
            .iter()
            .map(|l| (l.label.as_str(), l.value.as_str(), l.severity))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("Interpretation", "Borderline low output.", Severity::Borderline),
                ("CO", "4.71 L/min", Severity::Ok),
                ("CI", "2.48 L/min/m²", Severity::Borderline),
                ("CaO₂", "15.8 mL/dL", Severity::Ok),
                ("CvO₂", "10.5 mL/dL", Severity::Ok),
                ("Δ(O₂ content)", "5.3 mL/dL", Severity::Ok),
            ]
        );
        assert_eq!(
            copy_text(&v, &result),
            "Fick CO 4.71 L/min, CI 2.48 L/min/m². Borderline low output."
        );
    }

    #[test]
    fn test_without_bsa() {
        let result = compute(&values("250", "12", "98", "65", ""));
        assert!(result.line("CI").is_none());
        assert_eq!(result.lines[0].value, "Normal output.");
        assert_eq!(result.lines.len(), 5);
    }

    #[rstest]
    #[case("0.5", false)]
    #[case("0.51", true)]
    fn test_ci_needs_bsa_above_half(#[case] bsa: &str, #[case] indexed: bool) {
        let result = compute(&values("250", "12", "98", "65", bsa));
        assert!(result.line("CO").is_some());
        assert_eq!(result.line("CI").is_some(), indexed);
    }

    #[test]
    fn test_inverted_saturations() {
        let result = compute(&values("250", "12", "50", "60", "1.9"));
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].label, "Error");
        assert_eq!(result.lines[0].severity, Severity::Critical);
        assert_eq!(result.notes, vec!["Check SaO₂/SvO₂ and Hb.".to_string()]);
        assert_eq!(copy_text(&Values::new(), &result), "Fick CO: CaO₂−CvO₂ must be > 0.");
    }

    #[test]
    fn test_low_output_state() {
        // small VO₂ against a wide saturation gap
        let result = compute(&values("120", "10", "95", "55", "2.0"));
        assert_eq!(result.lines[0].value, "Low output state.");
        assert_eq!(result.lines[0].severity, Severity::Critical);
    }

    #[test]
    fn test_clamped_hemoglobin() {
        let clamped = compute(&values("250", "40", "98", "65", ""));
        let at_limit = compute(&values("250", "25", "98", "65", ""));
        assert_eq!(clamped, at_limit);
    }

    #[test]
    fn test_missing_input() {
        let result = compute(&values("250", "12", "98", "", "1.9"));
        assert!(result.is_empty());
        assert!(result.notes.is_empty());
    }
}
