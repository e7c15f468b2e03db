//! Clinical Calculator Evaluation Engine
//!
//! This crate provides the calculator definitions and everything needed to
//! run them:
//!
//! - **Calculators**: MAP, BMI, BSA, Shock Index, PVR, SVR, Stroke Volume,
//!   Fick and combined Cardiac Output, CPO, PAPI, Cockcroft-Gault CrCl,
//!   CHA₂DS₂-VASc and the MESA CAC reference
//! - **Scales**: the shared severity tables every metric is classified with
//! - **Registry**: the validated, name-sorted set of calculators
//! - **Engine**: the guarded evaluation boundary
//! - **Summary**: copy/export text
//! - **Session**: the active calculator and its values, as held by a caller
//!
//! # Example
//!
//! ```
//! use octofhir_calc_eval::{CalcEngine, Registry};
//!
//! let registry = Registry::builtin().unwrap();
//! let map = registry.by_id("map").unwrap();
//!
//! let mut values = map.initial_values();
//! map.apply_edit(&mut values, "sbp", "120").unwrap();
//! map.apply_edit(&mut values, "dbp", "70").unwrap();
//!
//! let result = CalcEngine::new(registry).evaluate_definition(map, &values);
//! assert_eq!(result.hero().unwrap().value, "86.7 mmHg");
//! ```
//!
//! # Empty results
//!
//! Evaluators are total. Missing or unusable input produces a result with no
//! lines, which callers render as "nothing to show yet". Only a domain
//! violation with diagnostic value (the Fick oxygen-content delta) produces a
//! single critical line explaining what is wrong.

pub mod calculators;
pub mod definition;
pub mod engine;
pub mod registry;
pub mod scales;
pub mod session;
pub mod summary;

pub use definition::{CalculatorDefinition, ComputeFn, CopyTextFn};
pub use engine::CalcEngine;
pub use registry::Registry;
pub use session::CalcSession;
pub use summary::{default_summary, summary_text};

pub use octofhir_calc_diagnostics::{CalcError, Result};
pub use octofhir_calc_types::*;
