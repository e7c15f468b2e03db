//! Copy/export text

use crate::CalculatorDefinition;
use octofhir_calc_types::{CalcResult, Values};

/// The calculator's own copy text when it has one, otherwise
/// [`default_summary`]
pub fn summary_text(def: &CalculatorDefinition, values: &Values, result: &CalcResult) -> String {
    match def.copy_text {
        Some(copy_text) => copy_text(values, result),
        None => default_summary(def.name, result),
    }
}

/// `"{name}: {label} {value}. {label} {value}."`, where `name` is the
/// calculator's display name
///
/// Just the name when there are no lines.
pub fn default_summary(name: &str, result: &CalcResult) -> String {
    if result.lines.is_empty() {
        return name.to_string();
    }
    let body = result
        .lines
        .iter()
        .map(|line| format!("{} {}", line.label, line.value))
        .collect::<Vec<_>>()
        .join(". ");
    format!("{}: {}.", name, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::{map, mesa_cac};
    use octofhir_calc_types::{FieldValue, ResultLine, Severity};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_summary() {
        let result = CalcResult::new(
            "Demo",
            vec![
                ResultLine::new("A", "1 u", Severity::Ok),
                ResultLine::new("B", "2", Severity::High),
            ],
        );
        assert_eq!(default_summary("Demo", &result), "Demo: A 1 u. B 2.");
        assert_eq!(default_summary("Demo", &CalcResult::empty("Ignored")), "Demo");
    }

    #[test]
    fn test_prefers_copy_text() {
        let values = Values::new()
            .with("sbp", FieldValue::number("120"))
            .with("dbp", FieldValue::number("70"));
        let result = map::DEFINITION.compute(&values);
        assert_eq!(summary_text(&map::DEFINITION, &values, &result), "MAP 86.7 mmHg. OK.");

        let without = CalculatorDefinition {
            copy_text: None,
            ..map::DEFINITION
        };
        assert_eq!(
            summary_text(&without, &values, &result),
            "Mean Arterial Pressure (MAP): MAP 86.7 mmHg."
        );
        let empty = without.compute(&without.initial_values());
        assert_eq!(
            summary_text(&without, &values, &empty),
            "Mean Arterial Pressure (MAP)"
        );
    }

    #[test]
    fn test_reference_calculator() {
        let values = mesa_cac::DEFINITION.initial_values();
        let result = mesa_cac::DEFINITION.compute(&values);
        assert!(summary_text(&mesa_cac::DEFINITION, &values, &result).starts_with("See MESA CAC"));
    }
}
