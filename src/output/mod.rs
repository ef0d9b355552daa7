//! Output module for rendering and persisting extraction results
//!
//! This module handles:
//! - Rendering results as markdown sections for the terminal
//! - Exporting rows as CSV
//! - Exporting values as pretty JSON

mod csv_output;
mod json_output;
mod markdown;
mod traits;

pub use csv_output::{export_csv, write_csv};
pub use json_output::{read_json, to_json_string, write_json};
pub use markdown::{format_result, format_summary};
pub use traits::{OutputError, OutputResult, Tabular};
