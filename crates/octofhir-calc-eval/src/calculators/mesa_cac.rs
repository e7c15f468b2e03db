//! MESA coronary artery calcium percentile
//!
//! The percentile tables live in the external MESA tool; this entry only
//! describes it and links out.

use crate::CalculatorDefinition;
use octofhir_calc_types::{CalcResult, Link, Values};

const TITLE: &str = "MESA CAC Percentile";

const URL: &str = "https://tools.mesa-nhlbi.org/Calcium/input.aspx";

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "mesa_cac",
    name: "MESA CAC Percentile",
    category: "Cardiology",
    tags: &["cac", "calcium", "mesa", "risk", "coronary"],
    fields: &[],
    links: &[Link::new("Open MESA CAC Calculator", URL)],
    compute,
    copy_text: Some(copy_text),
};

fn compute(_values: &Values) -> CalcResult {
    CalcResult::empty(TITLE).with_notes(&[
        "Inputs: age (45–84), sex, race/ethnicity, and optional Agatston CAC score.",
        "Outputs: probability of any CAC, 25th/50th/75th/90th percentile scores for the group, and percentile rank if a score is entered.",
        "Based on MESA cohort (n=6,110). McClelland RL et al., Circulation 2006;113:30–37.",
    ])
}

fn copy_text(_values: &Values, _result: &CalcResult) -> String {
    format!("See MESA CAC Percentile calculator: {}", URL)
}
