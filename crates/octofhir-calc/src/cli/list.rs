//! List command implementation

use super::output::{self, OutputFormat};
use anyhow::Result;
use colored::Colorize;
use octofhir_calc_eval::{CalculatorDefinition, Registry};
use serde::Serialize;
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

/// Configuration for list command
pub struct ListConfig {
    pub query: Option<String>,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// One row of the listing
#[derive(Debug, Serialize, Tabled)]
struct CalculatorRow {
    #[tabled(rename = "Id")]
    id: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Tags")]
    #[serde(skip)]
    tag_list: String,
    #[tabled(skip)]
    tags: &'static [&'static str],
}

impl From<&CalculatorDefinition> for CalculatorRow {
    fn from(def: &CalculatorDefinition) -> Self {
        Self {
            id: def.id,
            name: def.name,
            category: def.category,
            tag_list: def.tags.join(", "),
            tags: def.tags,
        }
    }
}

/// List calculators, optionally filtered by a search query
pub fn list(config: ListConfig) -> Result<()> {
    let registry = Registry::builtin()?;
    let matches = registry.search(config.query.as_deref().unwrap_or_default());
    log::debug!("{} of {} calculators match", matches.len(), registry.len());

    let rows: Vec<CalculatorRow> = matches.into_iter().map(CalculatorRow::from).collect();
    let content = render(&rows, config.format)?;
    output::write_output(&content, config.output_file.as_deref())
}

fn render(rows: &[CalculatorRow], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => output::format_json(&rows)?,
        OutputFormat::Table => Table::new(rows).with(Style::modern()).to_string(),
        OutputFormat::Pretty if rows.is_empty() => "No calculators match.".dimmed().to_string(),
        OutputFormat::Pretty => {
            let width = rows.iter().map(|row| row.id.len()).max().unwrap_or(0);
            rows.iter()
                .map(|row| {
                    format!(
                        "{:<width$}  {} {}",
                        row.id.cyan(),
                        row.name.bold(),
                        format!("[{}]", row.category).dimmed(),
                        width = width
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(query: &str) -> Vec<CalculatorRow> {
        Registry::builtin()
            .unwrap()
            .search(query)
            .into_iter()
            .map(CalculatorRow::from)
            .collect()
    }

    #[test]
    fn test_json_rows() {
        let json = render(&rows("renal"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], "crcl_cg");
        assert_eq!(value[0]["tags"][0], "renal");
        assert!(value[0].get("tag_list").is_none());
    }

    #[test]
    fn test_table_has_header() {
        let table = render(&rows("papi"), OutputFormat::Table).unwrap();
        assert!(table.contains("Category"));
        assert!(table.contains("rv, shock, papi"));
    }
}
