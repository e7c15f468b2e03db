//! Cardiac power output
//!
//! Two registrations share one evaluator and differ only in how the cardiac
//! output was measured.

use super::{hero_text, measured, rounded};
use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, ResultLine, Values};

const TITLE: &str = "CPO";

/// mmHg·L/min to watts
const WATTS: f64 = 451.0;

const NOTES: &[&str] = &[
    "CPO = MAP × CO / 451",
];

pub const FICK: CalculatorDefinition = CalculatorDefinition {
    id: "cpo_fick",
    name: "CPO (Fick)",
    category: "Hemodynamics",
    tags: &["cpo", "fick"],
    fields: &[
        FieldSpec::number("map", "MAP (mmHg)", "65"),
        FieldSpec::number("co", "CO (L/min) [Fick]", "3.5"),
    ],
    links: &[],
    compute,
    copy_text: Some(copy_fick),
};

pub const THERMODILUTION: CalculatorDefinition = CalculatorDefinition {
    id: "cpo_td",
    name: "CPO (Thermodilution)",
    category: "Hemodynamics",
    tags: &["cpo", "thermodilution"],
    fields: &[
        FieldSpec::number("map", "MAP (mmHg)", "65"),
        FieldSpec::number("co", "CO (L/min) [Thermo]", "3.5"),
    ],
    links: &[],
    compute,
    copy_text: Some(copy_thermodilution),
};

/// CPO line shared with the combined cardiac output calculator
pub(crate) fn cpo_line(map: f64, co: f64) -> Option<ResultLine> {
    let cpo = rounded(map * co / WATTS, 2)?;
    Some(measured("CPO", cpo, "W", &scales::CARDIAC_POWER))
}

fn compute(values: &Values) -> CalcResult {
    let map = values.number("map");
    let co = values.number("co");
    if !map.is_finite() || !(co > 0.0) {
        return CalcResult::empty(TITLE);
    }

    match cpo_line(map, co) {
        Some(line) => CalcResult::new(TITLE, vec![line]).with_notes(NOTES),
        None => CalcResult::empty(TITLE),
    }
}

fn copy_fick(_values: &Values, result: &CalcResult) -> String {
    hero_text("CPO (Fick)", result)
}

fn copy_thermodilution(_values: &Values, result: &CalcResult) -> String {
    hero_text("CPO (TD)", result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofhir_calc_types::{FieldValue, Severity};

    fn values(map: &str, co: &str) -> Values {
        Values::new()
            .with("map", FieldValue::number(map))
            .with("co", FieldValue::number(co))
    }

    #[test]
    fn test_shared_evaluator() {
        let v = values("65", "3.5");
        let fick = FICK.compute(&v);
        let td = THERMODILUTION.compute(&v);
        assert_eq!(fick, td);
        assert_eq!(fick.hero().unwrap().value, "0.5 W");
        assert_eq!(fick.hero().unwrap().severity, Severity::Critical);
        assert_eq!(copy_fick(&v, &fick), "CPO (Fick) 0.5 W");
        assert_eq!(copy_thermodilution(&v, &td), "CPO (TD) 0.5 W");
    }

    #[test]
    fn test_normal_power() {
        let result = compute(&values("80", "6"));
        assert_eq!(result.hero().unwrap().value, "1.06 W");
        assert_eq!(result.hero().unwrap().severity, Severity::Ok);
    }

    #[test]
    fn test_zero_output() {
        assert!(compute(&values("65", "0")).is_empty());
    }
}
