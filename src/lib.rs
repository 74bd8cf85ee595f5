//! Fetch the Zscaler egress address feed and turn it into JSON for firewall
//! allowlists, either as full records or collapsed into minimal CIDR blocks.
//!
//! The pipeline is `document -> extract -> [summarize] -> save_as_json`.

pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::{Config, OutputMode};
use std::time::Duration;

pub use error::{Error, FeedShapeError, RecordParseWarning};
pub use models::{AddressRecord, NetworkBlock};
pub use processing::{extract, summarize};

/// Load the feed, extract records and write the configured output.
///
/// Returns the number of entries written.
pub async fn run(config: &Config) -> Result<usize, Error> {
    let document =
        feed::load_feed(&config.source, Duration::from_secs(config.timeout_secs)).await?;
    let records = processing::extract_with_layout(&document, &config.layout)?;

    if config.report {
        output::print_region_summary(&records);
    }

    match config.mode {
        OutputMode::Full => {
            output::save_as_json(&records, &config.output)?;
            Ok(records.len())
        }
        OutputMode::Summarized => {
            let summary = processing::summarize_with_report(&records);
            if !summary.skipped.is_empty() {
                log::warn!(
                    "{} record(s) skipped, output is best effort",
                    summary.skipped.len()
                );
            }
            output::save_as_json(&summary.blocks, &config.output)?;
            Ok(summary.blocks.len())
        }
    }
}
