//! Show command implementation

use super::output::{self, OutputFormat};
use anyhow::Result;
use colored::Colorize;
use octofhir_calc_eval::{CalculatorDefinition, Registry};
use octofhir_calc_types::{FieldKind, FieldSpec};
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

/// Configuration for show command
pub struct ShowConfig {
    pub id: String,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Accepts")]
    accepts: String,
}

impl From<&FieldSpec> for FieldRow {
    fn from(field: &FieldSpec) -> Self {
        Self {
            key: field.key,
            label: field.label,
            kind: field.kind.name(),
            accepts: accepts(field),
        }
    }
}

/// What a field takes on the command line
fn accepts(field: &FieldSpec) -> String {
    match field.kind {
        FieldKind::Number { placeholder } => match placeholder {
            Some(example) => format!("number, e.g. {}", example),
            None => "number".to_string(),
        },
        FieldKind::Select { options, .. } => {
            let default = field.default_option();
            options
                .iter()
                .map(|option| {
                    let marker = if Some(option.value) == default { " (default)" } else { "" };
                    format!("{} = {}{}", option.value, option.label, marker)
                })
                .collect::<Vec<_>>()
                .join("; ")
        }
        FieldKind::Boolean => "yes/no".to_string(),
    }
}

/// Describe one calculator: identity, fields and links
pub fn show(config: ShowConfig) -> Result<()> {
    let def = Registry::builtin()?.get(&config.id)?;
    let content = render(def, config.format)?;
    output::write_output(&content, config.output_file.as_deref())
}

fn render(def: &CalculatorDefinition, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return output::format_json(def);
    }

    let mut text = format!(
        "{} {}\n{} {}",
        def.name.bold(),
        format!("({})", def.id).cyan(),
        "Category:".dimmed(),
        def.category
    );
    if !def.tags.is_empty() {
        text.push_str(&format!("\n{} {}", "Tags:".dimmed(), def.tags.join(", ")));
    }

    if def.fields.is_empty() {
        text.push_str(&format!("\n\n{}", "No inputs.".dimmed()));
    } else if format == OutputFormat::Table {
        let rows = def.fields.iter().map(FieldRow::from);
        text.push_str(&format!("\n\n{}", Table::new(rows).with(Style::modern())));
    } else {
        for field in def.fields {
            text.push_str(&format!(
                "\n  {:<10} {} [{}]",
                field.key.cyan(),
                field.label,
                accepts(field)
            ));
        }
    }

    for link in def.links {
        text.push_str(&format!("\n{} {}", link.label.bold(), link.url.underline()));
    }
    Ok(text)
}
