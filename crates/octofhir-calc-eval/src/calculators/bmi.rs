//! Body mass index

use super::{hero_text, measured, rounded};
use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, SelectOption, Values};

const TITLE: &str = "BMI";

const UNITS: &[SelectOption] = &[
    SelectOption::new("metric", "Metric (kg, cm)"),
    SelectOption::new("us", "US (lb, in)"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::select("units", "Units", UNITS, Some("metric")),
    FieldSpec::number("weight", "Weight", "80"),
    FieldSpec::number("height", "Height", "180"),
];

const NOTES: &[&str] = &[
    "Metric: weight (kg) / height (m)². US: 703 × weight (lb) / height (in)².",
];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "bmi",
    name: "BMI",
    category: "General",
    tags: &["bmi", "weight", "obesity"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

fn compute(values: &Values) -> CalcResult {
    let weight = values.number("weight");
    let height = values.number("height");
    if !(weight > 0.0 && height > 0.0) {
        return CalcResult::empty(TITLE);
    }

    let bmi = match values.select("units") {
        Some("us") => 703.0 * weight / (height * height),
        _ => {
            let meters = height / 100.0;
            weight / (meters * meters)
        }
    };

    let Some(bmi) = rounded(bmi, 1) else {
        return CalcResult::empty(TITLE);
    };

    CalcResult::new(TITLE, vec![measured("BMI", bmi, "", &scales::BMI)]).with_notes(NOTES)
}

fn copy_text(_values: &Values, result: &CalcResult) -> String {
    hero_text("BMI", result)
}
