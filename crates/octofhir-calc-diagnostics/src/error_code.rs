//! Calculator error codes following a structured numbering system
//!
//! Error code ranges:
//! - CALC0001-CALC0099: Input errors (field edits, assignments)
//! - CALC0100-CALC0199: Registry errors (lookup, registration)
//! - CALC0200-CALC0299: Evaluation errors (faults caught at the boundary)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is an input error (0001-0099)
    pub const fn is_input_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a registry error (0100-0199)
    pub const fn is_registry_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is an evaluation error (0200-0299)
    pub const fn is_evaluation_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CALC{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Input errors (0001-0099)
    map.insert(1, ErrorInfo::new("Unknown field")
        .with_help("Run `calc show <id>` to list the calculator's field keys"));
    map.insert(2, ErrorInfo::new("Field kind mismatch"));
    map.insert(3, ErrorInfo::new("Invalid select option"));
    map.insert(4, ErrorInfo::new("Invalid boolean value")
        .with_help("Use one of true/false, yes/no, on/off, 1/0"));
    map.insert(5, ErrorInfo::new("Malformed assignment")
        .with_help("Assignments are written as key=value"));
    map.insert(6, ErrorInfo::new("No active calculator")
        .with_help("Open a calculator before editing its fields"));

    // Registry errors (0100-0199)
    map.insert(100, ErrorInfo::new("Unknown calculator"));
    map.insert(101, ErrorInfo::new("Duplicate calculator id"));
    map.insert(102, ErrorInfo::new("Missing calculator id"));
    map.insert(103, ErrorInfo::new("Missing calculator name"));
    map.insert(104, ErrorInfo::new("Duplicate field key"));
    map.insert(105, ErrorInfo::new("Select field without options"));

    // Evaluation errors (0200-0299)
    map.insert(200, ErrorInfo::new("Computation failed")
        .with_help("This is a defect in the calculator definition, not an input problem"));

    map
});

// Input errors
pub const CALC0001: ErrorCode = ErrorCode::new(1);
pub const CALC0002: ErrorCode = ErrorCode::new(2);
pub const CALC0003: ErrorCode = ErrorCode::new(3);
pub const CALC0004: ErrorCode = ErrorCode::new(4);
pub const CALC0005: ErrorCode = ErrorCode::new(5);
pub const CALC0006: ErrorCode = ErrorCode::new(6);

// Registry errors
pub const CALC0100: ErrorCode = ErrorCode::new(100);
pub const CALC0101: ErrorCode = ErrorCode::new(101);
pub const CALC0102: ErrorCode = ErrorCode::new(102);
pub const CALC0103: ErrorCode = ErrorCode::new(103);
pub const CALC0104: ErrorCode = ErrorCode::new(104);
pub const CALC0105: ErrorCode = ErrorCode::new(105);

// Evaluation errors
pub const CALC0200: ErrorCode = ErrorCode::new(200);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(CALC0001.to_string(), "CALC0001");
        assert_eq!(CALC0101.to_string(), "CALC0101");
    }

    #[test]
    fn test_error_code_ranges() {
        assert!(CALC0003.is_input_error());
        assert!(CALC0101.is_registry_error());
        assert!(CALC0200.is_evaluation_error());
        assert!(!CALC0200.is_input_error());
    }

    #[test]
    fn test_error_info() {
        assert_eq!(CALC0101.info().description, "Duplicate calculator id");
        assert!(CALC0004.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
