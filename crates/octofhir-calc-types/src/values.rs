//! The input values record
//!
//! `Values` maps field keys to raw values. Number fields hold free-form text
//! that is only parsed when an evaluator reads it; select and boolean fields
//! hold their value directly. The kind of each slot is fixed when the record
//! is created from a calculator's fields.

use crate::field::{FieldKind, FieldSpec};
use crate::numeric::parse_number;
use indexmap::IndexMap;
use octofhir_calc_diagnostics::{CALC0001, CALC0002, CalcError, Result};
use serde::Serialize;
use std::fmt;

/// A raw field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Number(String),
    Select(String),
}

impl FieldValue {
    /// Number slot
    pub fn number(raw: impl Into<String>) -> Self {
        FieldValue::Number(raw.into())
    }

    /// Select slot
    pub fn select(value: impl Into<String>) -> Self {
        FieldValue::Select(value.into())
    }

    /// Name of the kind this value belongs to
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Number(_) => "number",
            FieldValue::Select(_) => "select",
            FieldValue::Boolean(_) => "boolean",
        }
    }

    /// Whether the value counts as user input
    pub fn is_set(&self) -> bool {
        match self {
            FieldValue::Number(raw) | FieldValue::Select(raw) => !raw.is_empty(),
            FieldValue::Boolean(flag) => *flag,
        }
    }

    fn same_kind(&self, other: &FieldValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(raw) | FieldValue::Select(raw) => write!(f, "{}", raw),
            FieldValue::Boolean(flag) => write!(f, "{}", flag),
        }
    }
}

/// Field key to raw value, in field declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Values {
    slots: IndexMap<String, FieldValue>,
}

impl Values {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record initialized with each field's default: `""` for
    /// numbers, the declared or first option for selects, `false` for booleans
    pub fn for_fields(fields: &[FieldSpec]) -> Self {
        let slots = fields
            .iter()
            .map(|field| {
                let value = match field.kind {
                    FieldKind::Number { .. } => FieldValue::Number(String::new()),
                    FieldKind::Select { .. } => {
                        FieldValue::Select(field.default_option().unwrap_or_default().to_string())
                    }
                    FieldKind::Boolean => FieldValue::Boolean(false),
                };
                (field.key.to_string(), value)
            })
            .collect();
        Self { slots }
    }

    /// Builder-style insert, for tests and fixtures
    pub fn with(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        self.slots.insert(key.into(), value);
        self
    }

    /// Replace a single slot.
    ///
    /// The slot must exist and keep its kind; a record created with
    /// [`Values::new`] has no slots, so use [`Values::with`] to populate it.
    pub fn set(&mut self, key: &str, value: FieldValue) -> Result<()> {
        let Some(slot) = self.slots.get_mut(key) else {
            return Err(CalcError::input_for(
                CALC0001,
                key,
                format!("No field named '{}'", key),
            ));
        };
        if !slot.same_kind(&value) {
            return Err(CalcError::input_for(
                CALC0002,
                key,
                format!(
                    "Field '{}' is a {} field, got a {} value",
                    key,
                    slot.kind_name(),
                    value.kind_name()
                ),
            ));
        }
        *slot = value;
        Ok(())
    }

    /// Raw value of a slot
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.slots.get(key)
    }

    /// Parsed number, NaN when missing, unparsable or not a number slot
    pub fn number(&self, key: &str) -> f64 {
        match self.slots.get(key) {
            Some(FieldValue::Number(raw)) => parse_number(raw),
            _ => f64::NAN,
        }
    }

    /// Selected option value
    pub fn select(&self, key: &str) -> Option<&str> {
        match self.slots.get(key) {
            Some(FieldValue::Select(value)) if !value.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    /// Boolean flag, false when missing
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.slots.get(key), Some(FieldValue::Boolean(true)))
    }

    /// Whether any number slot is non-empty or any flag is set.
    ///
    /// Select slots always hold an option from creation on, so they never
    /// count as input on their own.
    pub fn has_any_input(&self) -> bool {
        self.slots
            .values()
            .any(|value| !matches!(value, FieldValue::Select(_)) && value.is_set())
    }

    /// Iterate slots in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::SelectOption;

    const SEX: &[SelectOption] = &[SelectOption::new("m", "Male"), SelectOption::new("f", "Female")];

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::number("age", "Age (years)", "65"),
            FieldSpec::select("sex", "Sex at birth", SEX, None),
            FieldSpec::boolean("htn", "Hypertension"),
        ]
    }

    #[test]
    fn test_defaults() {
        let values = Values::for_fields(&fields());
        assert_eq!(values.get("age"), Some(&FieldValue::number("")));
        assert_eq!(values.select("sex"), Some("m"));
        assert!(!values.flag("htn"));
        assert!(values.number("age").is_nan());
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_set_keeps_kind() {
        let mut values = Values::for_fields(&fields());
        values.set("age", FieldValue::number("72")).unwrap();
        assert_eq!(values.number("age"), 72.0);

        let err = values.set("age", FieldValue::Boolean(true)).unwrap_err();
        assert_eq!(err.code(), CALC0002);

        let err = values.set("weight", FieldValue::number("80")).unwrap_err();
        assert_eq!(err.code(), CALC0001);
    }

    #[test]
    fn test_has_any_input() {
        let mut values = Values::for_fields(&[
            FieldSpec::number("age", "Age (years)", "65"),
            FieldSpec::boolean("htn", "Hypertension"),
        ]);
        assert!(!values.has_any_input());
        values.set("htn", FieldValue::Boolean(true)).unwrap();
        assert!(values.has_any_input());
    }

    #[test]
    fn test_declaration_order() {
        let values = Values::for_fields(&fields());
        let keys: Vec<_> = values.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["age", "sex", "htn"]);
    }
}
