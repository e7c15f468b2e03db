//! CHA₂DS₂-VASc stroke risk in atrial fibrillation

use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, ResultLine, Values};

const TITLE: &str = "CHA₂DS₂-VASc";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::boolean("chf", "CHF/LV dysfunction"),
    FieldSpec::boolean("htn", "Hypertension"),
    FieldSpec::boolean("age75", "Age ≥75"),
    FieldSpec::boolean("dm", "Diabetes"),
    FieldSpec::boolean("stroke", "Stroke/TIA/TE"),
    FieldSpec::boolean("vasc", "Vascular disease"),
    FieldSpec::boolean("age6574", "Age 65–74"),
    FieldSpec::boolean("female", "Female sex"),
];

/// One point each
const SINGLE_POINT: &[&str] = &["chf", "htn", "dm", "vasc", "female"];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "cha2ds2vasc",
    name: "CHA₂DS₂-VASc (Atrial Fibrillation)",
    category: "Cardiology",
    tags: &["afib", "stroke", "anticoag"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

fn score(values: &Values) -> u8 {
    let mut score = SINGLE_POINT.iter().filter(|key| values.flag(key)).count() as u8;
    if values.flag("age75") {
        score += 2;
    } else if values.flag("age6574") {
        score += 1;
    }
    if values.flag("stroke") {
        score += 2;
    }
    score
}

// Every box is worth at least one point and an unticked form never reaches
// these, so a score here is always 1 or more.

fn bucket(score: u8) -> &'static str {
    if score <= 1 {
        "Low to intermediate"
    } else {
        "Elevated"
    }
}

fn action(score: u8) -> &'static str {
    if score <= 1 {
        "Consider anticoagulation depending on context and bleeding risk."
    } else {
        "Anticoagulation generally recommended if no contraindication."
    }
}

fn compute(values: &Values) -> CalcResult {
    // nothing ticked is the untouched form, not a zero score
    if !values.has_any_input() {
        return CalcResult::empty(TITLE);
    }

    let score = score(values);
    let severity = scales::CHA2DS2_VASC.classify(f64::from(score));
    CalcResult::new(
        TITLE,
        vec![
            ResultLine::new("Score", score.to_string(), severity),
            ResultLine::new("Risk bucket", bucket(score), severity),
            ResultLine::new("Suggested action", action(score), severity),
        ],
    )
    .with_notes(&["Guidance only. Customize thresholds and language to your practice patterns."])
}

fn copy_text(_values: &Values, result: &CalcResult) -> String {
    if result.is_empty() {
        return TITLE.to_string();
    }
    let value = |label: &str| result.line(label).map(|line| line.value.as_str()).unwrap_or("");
    format!(
        "CHA₂DS₂-VASc {}. {}. {}",
        value("Score"),
        value("Risk bucket"),
        value("Suggested action")
    )
}
