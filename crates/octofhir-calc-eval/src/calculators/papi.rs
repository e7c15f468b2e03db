//! Pulmonary artery pulsatility index

use super::{hero_text, measured, rounded};
use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, Values};

const TITLE: &str = "PAPI";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("pasp", "PASP (mmHg)", "45"),
    FieldSpec::number("padp", "PADP (mmHg)", "20"),
    FieldSpec::number("rap", "RAP (mmHg)", "10"),
];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "papi",
    name: "PAPI",
    category: "Hemodynamics",
    tags: &["rv", "shock", "papi"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

fn compute(values: &Values) -> CalcResult {
    let pasp = values.number("pasp");
    let padp = values.number("padp");
    let rap = values.number("rap");
    if !pasp.is_finite() || !padp.is_finite() || !(rap > 0.0) {
        return CalcResult::empty(TITLE);
    }

    let Some(papi) = rounded((pasp - padp) / rap, 2) else {
        return CalcResult::empty(TITLE);
    };

    CalcResult::new(TITLE, vec![measured("PAPI", papi, "", &scales::PAPI)]).with_notes(&[
        "PAPI = (PASP − PADP) / RAP",
    ])
}

fn copy_text(_values: &Values, result: &CalcResult) -> String {
    hero_text("PAPI", result)
}
