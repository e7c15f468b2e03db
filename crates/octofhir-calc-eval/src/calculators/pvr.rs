//! Pulmonary vascular resistance and transpulmonary gradient

use super::{measured, rounded, with_unit};
use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, ResultLine, Values};

const TITLE: &str = "PVR";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("mpap", "mPAP (mmHg)", "25"),
    FieldSpec::number("pcwp", "PCWP (mmHg)", "12"),
    FieldSpec::number("co", "CO (L/min)", "4.5"),
];

const NOTES: &[&str] = &[
    "PVR = (mPAP − PCWP) / CO",
    "PVR ≥ 3 WU = elevated (combined pre+post-capillary PH per ESC 2022).",
    "TPG > 12 mmHg suggests pre-capillary component.",
];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "pvr",
    name: "PVR",
    category: "Hemodynamics",
    tags: &["pvr", "pulmonary", "hemodynamics", "cath"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

fn compute(values: &Values) -> CalcResult {
    let mpap = values.number("mpap");
    let pcwp = values.number("pcwp");
    let co = values.number("co");
    if !mpap.is_finite() || !pcwp.is_finite() || !(co > 0.0) {
        return CalcResult::empty(TITLE);
    }

    let gradient = mpap - pcwp;
    let wood_units = gradient / co;
    let (Some(pvr), Some(pvr_dyn), Some(tpg)) = (
        rounded(wood_units, 1),
        rounded(80.0 * wood_units, 0),
        rounded(gradient, 0),
    ) else {
        return CalcResult::empty(TITLE);
    };

    // the dyn·s·cm⁻⁵ line restates the Wood-unit value and shares its band
    let pvr_line = measured("PVR", pvr, "WU", &scales::PVR);
    let dyn_line = ResultLine::new("PVR", with_unit(pvr_dyn, "dyn·s·cm⁻⁵"), pvr_line.severity);

    CalcResult::new(
        TITLE,
        vec![pvr_line, dyn_line, measured("TPG", tpg, "mmHg", &scales::TPG)],
    )
    .with_notes(NOTES)
}

fn copy_text(_values: &Values, result: &CalcResult) -> String {
    if result.is_empty() {
        return TITLE.to_string();
    }
    result
        .lines
        .iter()
        .take(2)
        .map(|line| format!("{} {}", line.label, line.value))
        .collect::<Vec<_>>()
        .join(", ")
}
