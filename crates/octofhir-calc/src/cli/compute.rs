//! Compute and copy command implementation
//!
//! Inputs arrive as `key=value` assignments and are applied one by one
//! through a [`CalcSession`], exactly as a form would apply edits.

use super::output::{self, OutputFormat};
use anyhow::{Context, Result};
use colored::Colorize;
use octofhir_calc_diagnostics::{CALC0005, CalcError};
use octofhir_calc_eval::{CalcSession, CalculatorDefinition, Registry};
use octofhir_calc_types::{CalcResult, Severity, Values};
use serde::Serialize;
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

/// Shown in place of result lines before anything can be computed
pub const EMPTY_RESULT: &str = "Enter values to see results.";

/// Configuration for compute and copy commands
pub struct ComputeConfig {
    pub id: String,
    pub assignments: Vec<String>,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Split a `key=value` assignment
pub fn parse_assignment(assignment: &str) -> Result<(&str, &str), CalcError> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(CalcError::input(
            CALC0005,
            format!("Expected key=value, got '{}'", assignment),
        )),
    }
}

/// Open `id` in a fresh session and apply every assignment
fn session_for<'r>(
    registry: &'r Registry,
    id: &str,
    assignments: &[String],
) -> Result<CalcSession<'r>> {
    let mut session = CalcSession::new(registry);
    session.open(id)?;
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        session
            .edit(key, value)
            .with_context(|| format!("Invalid input for {}", id))?;
    }
    Ok(session)
}

/// JSON shape of a computed result
#[derive(Serialize)]
struct ComputeReport<'a> {
    calculator: &'static str,
    values: &'a Values,
    severity: Severity,
    result: &'a CalcResult,
    summary: Option<String>,
}

#[derive(Tabled)]
struct LineRow<'a> {
    #[tabled(rename = "Metric")]
    label: &'a str,
    #[tabled(rename = "Value")]
    value: &'a str,
    #[tabled(rename = "Severity")]
    severity: Severity,
}

/// Evaluate a calculator and print its result
pub fn compute(config: ComputeConfig) -> Result<()> {
    let registry = Registry::builtin()?;
    let session = session_for(registry, &config.id, &config.assignments)?;
    let (Some(def), Some(values), Some(result)) =
        (session.active(), session.values(), session.result())
    else {
        anyhow::bail!("No active calculator");
    };

    let content = match config.format {
        OutputFormat::Json => output::format_json(&ComputeReport {
            calculator: def.id,
            values,
            severity: result.severity(),
            result: &result,
            summary: session.copy_text(),
        })?,
        OutputFormat::Table => render_table(&result),
        OutputFormat::Pretty => render_pretty(def, &result),
    };
    output::write_output(&content, config.output_file.as_deref())
}

/// Print the copy/export text for a calculator
pub fn copy(config: ComputeConfig) -> Result<()> {
    let registry = Registry::builtin()?;
    let session = session_for(registry, &config.id, &config.assignments)?;
    let Some(text) = session.copy_text() else {
        anyhow::bail!("Nothing entered for {}; pass inputs as key=value", config.id);
    };
    output::write_output(&text, config.output_file.as_deref())
}

fn render_table(result: &CalcResult) -> String {
    if result.is_empty() {
        return EMPTY_RESULT.to_string();
    }
    let rows = result.lines.iter().map(|line| LineRow {
        label: &line.label,
        value: &line.value,
        severity: line.severity,
    });
    Table::new(rows).with(Style::modern()).to_string()
}

fn render_pretty(def: &CalculatorDefinition, result: &CalcResult) -> String {
    let mut text = result.title.bold().to_string();

    match result.hero() {
        None => text.push_str(&format!("\n  {}", EMPTY_RESULT.dimmed())),
        Some(hero) => {
            text.push_str(&format!(
                "\n  {} {}",
                hero.label,
                output::paint(&hero.value, hero.severity).bold()
            ));
            for line in result.secondary() {
                text.push_str(&format!(
                    "\n  {} {}",
                    line.label.dimmed(),
                    output::paint(&line.value, line.severity)
                ));
            }
        }
    }

    for note in &result.notes {
        text.push_str(&format!("\n  {} {}", "•".dimmed(), note.dimmed()));
    }
    for link in def.links {
        text.push_str(&format!("\n  {} {}", link.label, link.url.underline()));
    }
    text
}
