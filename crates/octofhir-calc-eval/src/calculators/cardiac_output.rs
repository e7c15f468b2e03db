//! Measured cardiac output with derived index, power and resistance

use super::{cpo::cpo_line, join_lines, measured, rounded, svr::svr_line};
use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, SelectOption, Values};

const TITLE: &str = "Cardiac Output";

/// Below this BSA the index is not computed
const MIN_BSA: f64 = 0.5;

const METHODS: &[SelectOption] = &[
    SelectOption::new("fick", "Fick CO"),
    SelectOption::new("thermo", "Thermodilution CO"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::select("method", "Method", METHODS, Some("fick")),
    FieldSpec::number("co", "Cardiac Output (L/min)", "3.5"),
    FieldSpec::number("bsa", "BSA (m²) [optional]", "1.9"),
    FieldSpec::number("map", "MAP (mmHg) [optional]", "65"),
    FieldSpec::number("rap", "RAP/CVP (mmHg) [optional]", "8"),
];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "cardiac_output",
    name: "Cardiac Output",
    category: "Hemodynamics",
    tags: &["co", "ci", "cpo", "svr"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

fn compute(values: &Values) -> CalcResult {
    let co = values.number("co");
    let bsa = values.number("bsa");
    let map = values.number("map");
    let rap = values.number("rap");

    if !(co > 0.0) {
        return CalcResult::empty(TITLE);
    }
    let Some(rounded_co) = rounded(co, 2) else {
        return CalcResult::empty(TITLE);
    };

    let mut lines = vec![measured("CO", rounded_co, "L/min", &scales::CARDIAC_OUTPUT)];

    if bsa > MIN_BSA {
        if let Some(ci) = rounded(co / bsa, 2) {
            lines.push(measured("CI", ci, "L/min/m²", &scales::CARDIAC_INDEX));
        }
    }

    if map.is_finite() {
        lines.extend(cpo_line(map, co));
        if rap.is_finite() {
            lines.extend(svr_line(map, rap, co));
        }
    }

    CalcResult::new(TITLE, lines).with_notes(&[
        "CI = CO / BSA; CPO = MAP × CO / 451; SVR = 80 × (MAP − RAP) / CO",
    ])
}

fn copy_text(values: &Values, result: &CalcResult) -> String {
    let method = METHODS
        .iter()
        .find(|option| Some(option.value) == values.select("method"))
        .map_or("CO", |option| option.label);
    if result.is_empty() {
        return method.to_string();
    }
    format!("{}: {}", method, join_lines(result, ". "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofhir_calc_types::{FieldValue, Severity};
    use pretty_assertions::assert_eq;

    fn values(co: &str, bsa: &str, map: &str, rap: &str) -> Values {
        Values::new()
            .with("method", FieldValue::select("thermo"))
            .with("co", FieldValue::number(co))
            .with("bsa", FieldValue::number(bsa))
            .with("map", FieldValue::number(map))
            .with("rap", FieldValue::number(rap))
    }

    #[test]
    fn test_all_derived_lines() {
        let v = values("4.5", "1.9", "75", "8");
        let result = compute(&v);
        let lines: Vec<_> = result
            .lines
            .iter()
            .map(|l| (l.label.as_str(), l.value.as_str(), l.severity))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("CO", "4.5 L/min", Severity::Ok),
                ("CI", "2.37 L/min/m²", Severity::Borderline),
                ("CPO", "0.75 W", Severity::High),
                ("SVR", "1191 dyn·s·cm⁻⁵", Severity::Ok),
            ]
        );
        assert_eq!(
            copy_text(&v, &result),
            "Thermodilution CO: CO 4.5 L/min. CI 2.37 L/min/m². CPO 0.75 W. SVR 1191 dyn·s·cm⁻⁵"
        );
    }

    #[test]
    fn test_svr_uses_shared_bidirectional_scale() {
        let result = compute(&values("4", "", "110", "10"));
        let svr = result.line("SVR").unwrap();
        assert_eq!(svr.value, "2000 dyn·s·cm⁻⁵");
        assert_eq!(svr.severity, Severity::High);
    }

    #[test]
    fn test_optional_inputs() {
        let result = compute(&values("3.2", "", "", "8"));
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].severity, Severity::Borderline);

        let result = compute(&values("3.2", "", "70", ""));
        let labels: Vec<_> = result.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["CO", "CPO"]);
    }

    #[test]
    fn test_missing_output() {
        assert!(compute(&values("", "1.9", "75", "8")).is_empty());
    }
}
