//! Calculator error types

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An error message with context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Calculator or field the diagnostic refers to
    pub subject: Option<String>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            subject: None,
            help: None,
        }
    }

    /// Set the subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with terminal colors
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let mut out = format!(
            "{}[{}]: {}",
            "error".red().bold(),
            self.code.to_string().bold(),
            self.message
        );
        if let Some(subject) = &self.subject {
            out.push_str(&format!(" ({})", subject.cyan()));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".green(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {} - {}", self.code, self.message)?;
        if let Some(subject) = &self.subject {
            write!(f, " ({})", subject)?;
        }
        Ok(())
    }
}

/// Main calculator error type
#[derive(Debug, Clone, Error)]
pub enum CalcError {
    /// A single-field edit or assignment was rejected
    #[error("{code}: {message}")]
    Input {
        code: ErrorCode,
        message: String,
        field: Option<String>,
    },

    /// Registry construction or lookup failed
    #[error("{code}: {message}")]
    Registry {
        code: ErrorCode,
        message: String,
        calculator: Option<String>,
    },

    /// An evaluator faulted and the fault was caught at the call boundary
    #[error("{code}: {message}")]
    Evaluation {
        code: ErrorCode,
        message: String,
        calculator: Option<String>,
    },

    /// Multiple errors collected
    #[error("Multiple errors: {}", .0.len())]
    Multiple(Vec<CalcError>),
}

impl CalcError {
    /// Create an input error
    pub fn input(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Create an input error attached to a field key
    pub fn input_for(code: ErrorCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a registry error
    pub fn registry(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Registry {
            code,
            message: message.into(),
            calculator: None,
        }
    }

    /// Create a registry error attached to a calculator id
    pub fn registry_for(
        code: ErrorCode,
        calculator: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Registry {
            code,
            message: message.into(),
            calculator: Some(calculator.into()),
        }
    }

    /// Create an evaluation error
    pub fn evaluation(code: ErrorCode, calculator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Evaluation {
            code,
            message: message.into(),
            calculator: Some(calculator.into()),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Input { code, .. } => *code,
            Self::Registry { code, .. } => *code,
            Self::Evaluation { code, .. } => *code,
            Self::Multiple(errors) => errors.first().map(|e| e.code()).unwrap_or(ErrorCode::new(0)),
        }
    }

    /// Get the field or calculator the error refers to
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::Input { field, .. } => field.as_deref(),
            Self::Registry { calculator, .. } | Self::Evaluation { calculator, .. } => calculator.as_deref(),
            Self::Multiple(errors) => errors.first().and_then(|e| e.subject()),
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Input { code, message, .. }
            | Self::Registry { code, message, .. }
            | Self::Evaluation { code, message, .. } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(subject) = self.subject() {
                    diag = diag.with_subject(subject);
                }
                if let Some(help) = code.info().help {
                    diag = diag.with_help(help);
                }
                diag
            }
            Self::Multiple(errors) => {
                if let Some(first) = errors.first() {
                    first.to_diagnostic()
                } else {
                    Diagnostic::error(ErrorCode::new(0), "Unknown error")
                }
            }
        }
    }
}
