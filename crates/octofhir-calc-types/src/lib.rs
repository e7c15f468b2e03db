//! Clinical calculator type system
//!
//! This crate defines the data shared by every calculator:
//! - Numeric utilities (lenient parsing, clamping, rounding, formatting)
//! - Field schema (`FieldSpec` with a closed `FieldKind` variant)
//! - The mutable input record (`Values`)
//! - Severity bands and reusable threshold scales
//! - The structured result (`CalcResult`, `ResultLine`)

pub mod field;
pub mod numeric;
pub mod result;
pub mod severity;
pub mod values;

pub use field::{FieldKind, FieldSpec, Link, SelectOption};
pub use numeric::{clamp, format_number, parse_number, round};
pub use result::{CalcResult, ResultLine};
pub use severity::{Band, Bound, Direction, Severity, SeverityScale};
pub use values::{FieldValue, Values};
