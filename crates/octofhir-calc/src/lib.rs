//! Clinical calculator engine
//!
//! This crate bundles the calculator workspace behind one dependency:
//! - Field schemas, value records and severity bands (`types`)
//! - Calculator definitions, registry, guarded evaluation and sessions (`eval`)
//! - Error codes and diagnostics (`diagnostics`)
//!
//! # Example
//!
//! ```
//! use octofhir_calc::{CalcSession, Registry};
//!
//! let mut session = CalcSession::new(Registry::builtin().unwrap());
//! session.open("shock_index").unwrap();
//! session.edit("hr", "110").unwrap();
//! session.edit("sbp", "100").unwrap();
//!
//! assert_eq!(session.copy_text().unwrap(), "Shock Index 1.1");
//! ```

// Re-export all public APIs from internal crates
pub use octofhir_calc_diagnostics as diagnostics;
pub use octofhir_calc_eval as eval;
pub use octofhir_calc_types as types;

// Convenience re-exports
pub use octofhir_calc_diagnostics::{CalcError, Result};
pub use octofhir_calc_eval::{
    CalcEngine, CalcSession, CalculatorDefinition, Registry, default_summary, summary_text,
};
pub use octofhir_calc_types::{CalcResult, FieldKind, FieldSpec, ResultLine, Severity, Values};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
