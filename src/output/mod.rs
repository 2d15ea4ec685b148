//! Output formatting for subnet allocations.
//!
//! This module handles formatting and outputting allocation results:
//! - [`table`] - aligned table output with colors
//! - [`report`] - plain-text report rendering
//! - [`json`] - machine-readable JSON
//! - [`terminal`] - terminal formatting helpers

mod json;
mod report;
mod table;
mod terminal;

pub use json::{allocations_to_json, validation_to_json};
pub use report::render_report;
pub use table::print_allocations;
pub use terminal::format_field;
