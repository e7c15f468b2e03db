//! Systemic vascular resistance

use super::{hero_text, measured, rounded};
use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, ResultLine, Values};

const TITLE: &str = "SVR";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("map", "MAP (mmHg)", "75"),
    FieldSpec::number("rap", "RAP/CVP (mmHg)", "8"),
    FieldSpec::number("co", "CO (L/min)", "4.5"),
];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "svr",
    name: "SVR",
    category: "Hemodynamics",
    tags: &["svr", "afterload", "hemodynamics"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

/// SVR line shared with the combined cardiac output calculator.
///
/// `None` when the inputs do not produce a finite resistance; the caller
/// validates `co > 0`.
pub(crate) fn svr_line(map: f64, rap: f64, co: f64) -> Option<ResultLine> {
    let svr = rounded(80.0 * (map - rap) / co, 0)?;
    Some(measured("SVR", svr, "dyn·s·cm⁻⁵", &scales::SVR))
}

fn compute(values: &Values) -> CalcResult {
    let map = values.number("map");
    let rap = values.number("rap");
    let co = values.number("co");
    if !map.is_finite() || !rap.is_finite() || !(co > 0.0) {
        return CalcResult::empty(TITLE);
    }

    match svr_line(map, rap, co) {
        Some(line) => CalcResult::new(TITLE, vec![line]).with_notes(&[
            "SVR = 80 × (MAP − RAP) / CO",
        ]),
        None => CalcResult::empty(TITLE),
    }
}

fn copy_text(_values: &Values, result: &CalcResult) -> String {
    hero_text("SVR", result)
}
