//! Creatinine clearance by Cockcroft-Gault

use super::rounded;
use crate::{CalculatorDefinition, scales};
use octofhir_calc_types::{CalcResult, FieldSpec, ResultLine, SelectOption, Values, clamp, format_number};

const TITLE: &str = "CrCl";

const SEXES: &[SelectOption] = &[SelectOption::new("m", "Male"), SelectOption::new("f", "Female")];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("age", "Age (years)", "65"),
    FieldSpec::number("weight", "Weight (kg)", "80"),
    FieldSpec::number("scr", "Serum creatinine (mg/dL)", "1.2"),
    FieldSpec::select("sex", "Sex at birth", SEXES, Some("m")),
];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "crcl_cg",
    name: "Creatinine Clearance (Cockcroft-Gault)",
    category: "General",
    tags: &["renal", "dosing", "crcl"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

fn band(crcl: f64) -> &'static str {
    if crcl < 15.0 {
        "<15"
    } else if crcl < 30.0 {
        "15–29"
    } else if crcl < 60.0 {
        "30–59"
    } else {
        "≥60"
    }
}

fn compute(values: &Values) -> CalcResult {
    let age = values.number("age");
    let weight = values.number("weight");
    let scr = values.number("scr");
    if ![age, weight, scr].iter().all(|n| n.is_finite()) {
        return CalcResult::empty(TITLE);
    }

    let age = clamp(age, 0.0, 120.0);
    let weight = clamp(weight, 0.0, 300.0);
    let scr = clamp(scr, 0.1, 20.0);

    let mut crcl = (140.0 - age) * weight / (72.0 * scr);
    if values.select("sex") == Some("f") {
        crcl *= 0.85;
    }
    let Some(crcl) = rounded(crcl, 1) else {
        return CalcResult::empty(TITLE);
    };

    let severity = scales::CREATININE_CLEARANCE.classify(crcl);
    CalcResult::new(
        TITLE,
        vec![
            ResultLine::new("CrCl", format!("{} mL/min", format_number(crcl)), severity),
            ResultLine::new("Band", band(crcl), severity),
        ],
    )
    .with_notes(&["Use caution in unstable creatinine and extremes of body size."])
}

fn copy_text(_values: &Values, result: &CalcResult) -> String {
    if result.is_empty() {
        return "CrCl (Cockcroft-Gault)".to_string();
    }
    let value = |label: &str| result.line(label).map(|line| line.value.as_str()).unwrap_or("");
    format!("CrCl (Cockcroft-Gault) {} (band {}).", value("CrCl"), value("Band"))
}
