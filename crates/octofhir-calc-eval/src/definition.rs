//! Calculator definitions
//!
//! A definition is static data: identity, display metadata, the field schema
//! and two plain function pointers. Definitions are declared as `const` items
//! in the `calculators` modules and owned by the [`Registry`](crate::Registry).

use octofhir_calc_diagnostics::{CALC0001, CALC0003, CALC0004, CalcError, Result};
use octofhir_calc_types::{CalcResult, FieldKind, FieldSpec, FieldValue, Link, Values};
use serde::Serialize;
use std::fmt;

/// Evaluator: pure and total over any values record
pub type ComputeFn = fn(&Values) -> CalcResult;

/// Copy/export text builder
pub type CopyTextFn = fn(&Values, &CalcResult) -> String;

/// A registered calculator
#[derive(Clone, Copy, Serialize)]
pub struct CalculatorDefinition {
    /// Globally unique, stable identifier
    pub id: &'static str,
    /// Display name and sort key
    pub name: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub fields: &'static [FieldSpec],
    pub links: &'static [Link],
    #[serde(skip)]
    pub compute: ComputeFn,
    #[serde(skip)]
    pub copy_text: Option<CopyTextFn>,
}

impl fmt::Debug for CalculatorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("fields", &self.fields.len())
            .field("copy_text", &self.copy_text.is_some())
            .finish()
    }
}

impl CalculatorDefinition {
    /// A fresh values record with every field at its default
    pub fn initial_values(&self) -> Values {
        Values::for_fields(self.fields)
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Run the evaluator directly, without the fault guard of
    /// [`CalcEngine`](crate::CalcEngine)
    pub fn compute(&self, values: &Values) -> CalcResult {
        (self.compute)(values)
    }

    /// Apply a single-field edit from raw text.
    ///
    /// Number fields take the text as is. Select fields require one of the
    /// declared option values. Boolean fields accept true/false, yes/no,
    /// on/off and 1/0.
    pub fn apply_edit(&self, values: &mut Values, key: &str, raw: &str) -> Result<()> {
        let field = self.field(key).ok_or_else(|| {
            CalcError::input_for(
                CALC0001,
                key,
                format!("{} has no field named '{}'", self.name, key),
            )
        })?;

        let value = match field.kind {
            FieldKind::Number { .. } => FieldValue::number(raw),
            FieldKind::Select { options, .. } => {
                let choice = raw.trim();
                if !options.iter().any(|option| option.value == choice) {
                    let allowed: Vec<_> = options.iter().map(|option| option.value).collect();
                    return Err(CalcError::input_for(
                        CALC0003,
                        key,
                        format!("'{}' is not one of: {}", choice, allowed.join(", ")),
                    ));
                }
                FieldValue::select(choice)
            }
            FieldKind::Boolean => FieldValue::Boolean(parse_flag(raw).ok_or_else(|| {
                CalcError::input_for(CALC0004, key, format!("'{}' is not a yes/no value", raw.trim()))
            })?),
        };

        values.set(key, value)
    }

    /// Lowercase text searched by [`Registry::search`](crate::Registry::search)
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.name, self.category, self.tags.join(" ")).to_lowercase()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}
