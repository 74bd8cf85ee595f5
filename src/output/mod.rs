//! Output of records and blocks.
//!
//! - [`json`] - JSON file writer
//! - [`terminal`] - per region report on stdout

mod json;
mod terminal;

pub use json::save_as_json;
pub use terminal::{format_field, print_region_summary, region_counts, RegionCount};
