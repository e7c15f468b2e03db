//! Built-in calculators
//!
//! Each module declares one or more `const` [`CalculatorDefinition`]s. The
//! registration list is explicit: a calculator that is not named in [`ALL`]
//! does not exist.

pub mod bmi;
pub mod bsa;
pub mod cardiac_output;
pub mod cha2ds2vasc;
pub mod cpo;
pub mod crcl;
pub mod fick_co;
pub mod map;
pub mod mesa_cac;
pub mod papi;
pub mod pvr;
pub mod shock_index;
pub mod stroke_volume;
pub mod svr;

use crate::CalculatorDefinition;
use octofhir_calc_types::{CalcResult, ResultLine, Severity, SeverityScale, format_number, round};

/// Every built-in calculator, in registration order
pub static ALL: &[CalculatorDefinition] = &[
    map::DEFINITION,
    bmi::DEFINITION,
    bsa::DEFINITION,
    shock_index::DEFINITION,
    pvr::DEFINITION,
    stroke_volume::DEFINITION,
    svr::DEFINITION,
    fick_co::DEFINITION,
    papi::DEFINITION,
    cardiac_output::DEFINITION,
    cpo::FICK,
    cpo::THERMODILUTION,
    crcl::DEFINITION,
    cha2ds2vasc::DEFINITION,
    mesa_cac::DEFINITION,
];

/// `Some(n)` when `n` is finite
pub(crate) fn finite(n: f64) -> Option<f64> {
    n.is_finite().then_some(n)
}

/// Round and check in one step; `None` means the evaluator should bail out
pub(crate) fn rounded(n: f64, digits: i32) -> Option<f64> {
    finite(round(n, digits))
}

/// `"{value} {unit}"`, or the bare value when `unit` is empty
pub(crate) fn with_unit(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format_number(value)
    } else {
        format!("{} {}", format_number(value), unit)
    }
}

/// A line classified on its displayed (rounded) value
pub(crate) fn measured(label: &str, value: f64, unit: &str, scale: &SeverityScale) -> ResultLine {
    ResultLine::new(label, with_unit(value, unit), scale.classify(value))
}

/// A line with no clinical banding
pub(crate) fn informational(label: &str, value: f64, unit: &str) -> ResultLine {
    ResultLine::new(label, with_unit(value, unit), Severity::Ok)
}

/// `"{label} {value}"` for each line, joined with `separator`
pub(crate) fn join_lines(result: &CalcResult, separator: &str) -> String {
    result
        .lines
        .iter()
        .map(|line| format!("{} {}", line.label, line.value))
        .collect::<Vec<_>>()
        .join(separator)
}

/// `"{prefix} {hero value}"`, or just the prefix before anything is computed
pub(crate) fn hero_text(prefix: &str, result: &CalcResult) -> String {
    match result.hero() {
        Some(hero) => format!("{} {}", prefix, hero.value),
        None => prefix.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = ALL.iter().map(|def| def.id).collect();
        assert_eq!(ids.len(), ALL.len());
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(with_unit(86.7, "mmHg"), "86.7 mmHg");
        assert_eq!(with_unit(1.1, ""), "1.1");
    }

    #[test]
    fn test_rounded_rejects_overflow() {
        assert_eq!(rounded(f64::MAX * 2.0, 1), None);
        assert_eq!(rounded(2.345, 1), Some(2.3));
    }
}
