//! Output formatting for subnet data.
//!
//! - [`terminal`] - the five line text report
//! - [`json`] - JSON report

mod json;
mod terminal;

pub use json::format_json;
pub use terminal::{binary, dotted, format_report};
