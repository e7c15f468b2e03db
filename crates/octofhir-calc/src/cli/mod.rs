//! CLI functionality for the calculator tool
//!
//! This module contains all CLI-related functionality including:
//! - Listing and searching calculators
//! - Showing a calculator's field schema
//! - Computing results and copy text from `key=value` assignments
//! - Output formatting

pub mod compute;
pub mod list;
pub mod output;
pub mod show;
