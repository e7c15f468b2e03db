//! Structured calculator output

use crate::severity::Severity;
use serde::Serialize;

/// One displayed metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultLine {
    pub label: String,
    /// Pre-formatted value including units
    pub value: String,
    pub severity: Severity,
}

impl ResultLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>, severity: Severity) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            severity,
        }
    }
}

/// Output of one evaluation.
///
/// An empty `lines` sequence means the input is insufficient or invalid. It is
/// the "nothing to show yet" state, not an error. The first line is the hero
/// metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalcResult {
    pub title: String,
    pub lines: Vec<ResultLine>,
    pub notes: Vec<String>,
}

impl CalcResult {
    /// Result with no lines and no notes
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn new(title: impl Into<String>, lines: Vec<ResultLine>) -> Self {
        Self {
            title: title.into(),
            lines,
            notes: Vec::new(),
        }
    }

    /// Attach static reference notes
    pub fn with_notes(mut self, notes: &[&str]) -> Self {
        self.notes = notes.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The first, most prominent line
    pub fn hero(&self) -> Option<&ResultLine> {
        self.lines.first()
    }

    /// Lines after the hero
    pub fn secondary(&self) -> &[ResultLine] {
        self.lines.get(1..).unwrap_or_default()
    }

    /// First line with the given label
    pub fn line(&self, label: &str) -> Option<&ResultLine> {
        self.lines.iter().find(|line| line.label == label)
    }

    /// Worst severity across all lines
    pub fn severity(&self) -> Severity {
        Severity::worst(self.lines.iter().map(|line| line.severity))
    }
}
