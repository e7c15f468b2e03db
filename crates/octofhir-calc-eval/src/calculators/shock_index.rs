//! Shock index

use super::{hero_text, measured, rounded};
use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, Values};

const TITLE: &str = "Shock Index";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("hr", "Heart Rate (bpm)", "110"),
    FieldSpec::number("sbp", "Systolic BP (mmHg)", "100"),
];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "shock_index",
    name: "Shock Index",
    category: "Critical Care",
    tags: &["shock", "hemodynamics"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

fn compute(values: &Values) -> CalcResult {
    let hr = values.number("hr");
    let sbp = values.number("sbp");
    if !hr.is_finite() || !(sbp > 0.0) {
        return CalcResult::empty(TITLE);
    }

    let Some(si) = rounded(hr / sbp, 2) else {
        return CalcResult::empty(TITLE);
    };

    CalcResult::new(TITLE, vec![measured("Shock Index", si, "", &scales::SHOCK_INDEX)])
        .with_notes(&["SI = HR / SBP"])
}

fn copy_text(_values: &Values, result: &CalcResult) -> String {
    hero_text("Shock Index", result)
}
