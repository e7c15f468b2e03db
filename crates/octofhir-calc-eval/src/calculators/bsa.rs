//! Body surface area (Mosteller)

use super::{hero_text, informational, rounded};
use crate::CalculatorDefinition;
use octofhir_calc_types::{CalcResult, FieldSpec, Values};

const TITLE: &str = "BSA";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("height_cm", "Height (cm)", "180"),
    FieldSpec::number("weight_kg", "Weight (kg)", "80"),
];

pub const DEFINITION: CalculatorDefinition = CalculatorDefinition {
    id: "bsa",
    name: "BSA (Mosteller)",
    category: "General",
    tags: &["bsa", "mosteller"],
    fields: FIELDS,
    links: &[],
    compute,
    copy_text: Some(copy_text),
};

fn compute(values: &Values) -> CalcResult {
    let height = values.number("height_cm");
    let weight = values.number("weight_kg");
    if !(height > 0.0 && weight > 0.0) {
        return CalcResult::empty(TITLE);
    }

    let Some(bsa) = rounded((height * weight / 3600.0).sqrt(), 2) else {
        return CalcResult::empty(TITLE);
    };

    CalcResult::new(TITLE, vec![informational("BSA", bsa, "m²")])
        .with_notes(&["Mosteller: √(height (cm) × weight (kg) / 3600)"])
}

fn copy_text(_values: &Values, result: &CalcResult) -> String {
    hero_text("BSA", result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofhir_calc_types::{FieldValue, Severity};

    #[test]
    fn test_mosteller() {
        let values = Values::new()
            .with("height_cm", FieldValue::number("180"))
            .with("weight_kg", FieldValue::number("80"));
        let result = compute(&values);
        assert_eq!(result.hero().unwrap().value, "2 m²");
        assert_eq!(result.hero().unwrap().severity, Severity::Ok);
        assert_eq!(copy_text(&values, &result), "BSA 2 m²");
    }

    #[test]
    fn test_two_decimals() {
        let values = Values::new()
            .with("height_cm", FieldValue::number("170"))
            .with("weight_kg", FieldValue::number("70"));
        assert_eq!(compute(&values).hero().unwrap().value, "1.82 m²");
    }
}
