//! Mean arterial pressure

use super::{measured, rounded};
use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, Severity, Values};

const TITLE: &str = "MAP";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("sbp", "SBP (mmHg)", "120"),
    FieldSpec::number("dbp", "DBP (mmHg)", "70"),
];

const NOTES: &[&str] = &[
    "Formula: (SBP + 2×DBP) / 3",
    "Common target ≥65 mmHg in shock states.",
];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "map",
    name: "Mean Arterial Pressure (MAP)",
    category: "Critical Care",
    tags: &["bp", "map", "hemodynamics"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

fn compute(values: &Values) -> CalcResult {
    let sbp = values.number("sbp");
    let dbp = values.number("dbp");

    let Some(map) = rounded((sbp + 2.0 * dbp) / 3.0, 1) else {
        return CalcResult::empty(TITLE);
    };

    CalcResult::new(TITLE, vec![measured("MAP", map, "mmHg", &scales::MAP)]).with_notes(NOTES)
}

fn copy_text(_values: &Values, result: &CalcResult) -> String {
    let Some(hero) = result.hero() else {
        return TITLE.to_string();
    };
    let interpretation = match hero.severity {
        Severity::Critical => "Critically low.",
        Severity::High => "Low.",
        Severity::Borderline => "Borderline low.",
        Severity::Ok => "OK.",
    };
    format!("MAP {}. {}", hero.value, interpretation)
}
