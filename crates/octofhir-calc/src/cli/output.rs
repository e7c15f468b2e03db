//! Output formatting utilities

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use octofhir_calc_diagnostics::CalcError;
use octofhir_calc_types::Severity;
use serde::Serialize;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored by severity
    #[default]
    Pretty,
    /// Pretty-printed JSON
    Json,
    /// Bordered table
    Table,
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Set up color output based on user preference
pub fn setup_colors(mode: ColorMode) {
    let enabled = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal(),
    };
    colored::control::set_override(enabled);
}

/// Format an error for display.
///
/// Calculator errors render as a full diagnostic with code and help; the
/// outer context, if any, is printed first.
pub fn format_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<CalcError>() {
        Some(calc) if error.chain().count() > 1 => {
            format!("{} {}\n{}", "Error:".red().bold(), error, calc.to_diagnostic().render_colored())
        }
        Some(calc) => calc.to_diagnostic().render_colored(),
        None => {
            let mut text = format!("{} {}", "Error:".red().bold(), error);
            for cause in error.chain().skip(1) {
                text.push_str(&format!("\n  {} {}", "caused by:".dimmed(), cause));
            }
            text
        }
    }
}

/// Process exit status for a failed command.
///
/// Calculator errors map by code range: 2 for input errors, 3 for registry
/// errors, 4 for evaluation faults. Anything else exits with 1.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    let Some(code) = error.downcast_ref::<CalcError>().map(CalcError::code) else {
        return 1;
    };
    if code.is_input_error() {
        2
    } else if code.is_registry_error() {
        3
    } else if code.is_evaluation_error() {
        4
    } else {
        1
    }
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Paint `text` with the color of `severity`
pub fn paint(text: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Ok => text.green(),
        Severity::Borderline => text.yellow(),
        Severity::High => text.red(),
        Severity::Critical => text.red().bold(),
    }
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{}", content)
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Serialize a value as pretty JSON
pub fn format_json(value: &impl Serialize) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON")
}
