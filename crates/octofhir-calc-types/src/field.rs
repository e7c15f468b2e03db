//! Declarative field schema
//!
//! A calculator declares its inputs as an ordered slice of [`FieldSpec`]s. The
//! kind of a field is a closed variant, so a select field cannot exist without
//! its options and a boolean field carries no extra attributes.

use serde::Serialize;

/// One choice of a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Value stored in the values record
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// The kind of a field and the attributes that kind requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Free-form numeric text, parsed lazily by the evaluator
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<&'static str>,
    },
    /// One of an ordered set of options
    Select {
        options: &'static [SelectOption],
        #[serde(rename = "defaultValue", skip_serializing_if = "Option::is_none")]
        default: Option<&'static str>,
    },
    /// Yes/no flag
    Boolean,
}

impl FieldKind {
    /// Short name used in listings
    pub const fn name(&self) -> &'static str {
        match self {
            FieldKind::Number { .. } => "number",
            FieldKind::Select { .. } => "select",
            FieldKind::Boolean => "boolean",
        }
    }
}

/// A single calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Slot key in the values record, unique within a calculator
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Numeric field with a placeholder hint
    pub const fn number(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Number {
                placeholder: Some(placeholder),
            },
        }
    }

    /// Select field; the first option is the default unless `default` is set
    pub const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
        default: Option<&'static str>,
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Select { options, default },
        }
    }

    /// Boolean field
    pub const fn boolean(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Boolean,
        }
    }

    /// Placeholder hint for numeric fields
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Number { placeholder } => placeholder,
            _ => None,
        }
    }

    /// Options for select fields, empty otherwise
    pub fn options(&self) -> &'static [SelectOption] {
        match self.kind {
            FieldKind::Select { options, .. } => options,
            _ => &[],
        }
    }

    /// Initial select value: the declared default, else the first option
    pub fn default_option(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Select { options, default } => {
                default.or_else(|| options.first().map(|o| o.value))
            }
            _ => None,
        }
    }
}

/// External reference attached to a calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

impl Link {
    pub const fn new(label: &'static str, url: &'static str) -> Self {
        Self { label, url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNITS: &[SelectOption] = &[
        SelectOption::new("metric", "Metric (kg, cm)"),
        SelectOption::new("us", "US (lb, in)"),
    ];

    #[test]
    fn test_default_option() {
        let declared = FieldSpec::select("units", "Units", UNITS, Some("us"));
        assert_eq!(declared.default_option(), Some("us"));

        let implicit = FieldSpec::select("units", "Units", UNITS, None);
        assert_eq!(implicit.default_option(), Some("metric"));

        let number = FieldSpec::number("hr", "Heart Rate (bpm)", "75");
        assert_eq!(number.default_option(), None);
        assert_eq!(number.placeholder(), Some("75"));
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(FieldSpec::boolean("chf", "CHF/LV dysfunction")).unwrap();
        assert_eq!(json["type"], "boolean");
        assert_eq!(json["key"], "chf");

        let json = serde_json::to_value(FieldSpec::select("units", "Units", UNITS, Some("metric"))).unwrap();
        assert_eq!(json["type"], "select");
        assert_eq!(json["defaultValue"], "metric");
        assert_eq!(json["options"][1]["value"], "us");
    }
}
