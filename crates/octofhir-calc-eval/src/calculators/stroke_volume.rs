//! Stroke volume and stroke volume index

use super::{join_lines, measured, rounded};
use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, Values};

const TITLE: &str = "Stroke Volume";

/// Below this BSA the index is not computed
const MIN_BSA: f64 = 0.5;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("co", "CO (L/min)", "4.5"),
    FieldSpec::number("hr", "Heart Rate (bpm)", "75"),
    FieldSpec::number("bsa", "BSA (m²) [optional]", "1.9"),
];

const NOTES: &[&str] = &[
    "SV = (CO / HR) × 1000",
    "Normal SV: 60–100 mL/beat. Normal SVI: 33–47 mL/beat/m².",
];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "stroke_volume",
    name: "Stroke Volume & SVI",
    category: "Hemodynamics",
    tags: &["sv", "svi", "stroke volume", "hemodynamics"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

fn compute(values: &Values) -> CalcResult {
    let co = values.number("co");
    let hr = values.number("hr");
    let bsa = values.number("bsa");
    if !(co > 0.0 && hr > 0.0) {
        return CalcResult::empty(TITLE);
    }

    let stroke_volume = co / hr * 1000.0;
    let Some(sv) = rounded(stroke_volume, 0) else {
        return CalcResult::empty(TITLE);
    };

    let mut lines = vec![measured("SV", sv, "mL/beat", &scales::STROKE_VOLUME)];

    if bsa > MIN_BSA {
        if let Some(svi) = rounded(stroke_volume / bsa, 0) {
            lines.push(measured("SVI", svi, "mL/beat/m²", &scales::STROKE_VOLUME_INDEX));
        }
    }

    CalcResult::new(TITLE, lines).with_notes(NOTES)
}

fn copy_text(_values: &Values, result: &CalcResult) -> String {
    if result.is_empty() {
        return TITLE.to_string();
    }
    join_lines(result, ", ")
}
