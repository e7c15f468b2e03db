//! Calculator diagnostics and error handling
//!
//! This crate provides the error handling infrastructure for the clinical
//! calculator engine: structured error codes, the `CalcError` type and
//! displayable diagnostics.
//!
//! Note that an empty result is *not* an error. Calculators report missing or
//! incomplete input by returning no result lines; `CalcError` is reserved for
//! API misuse (unknown calculators, bad edits, invalid registrations) and for
//! evaluator faults caught at the call boundary.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for calculator operations
pub type Result<T> = std::result::Result<T, CalcError>;
