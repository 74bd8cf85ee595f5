//! Flatten the vendor table into address records.
//!
//! Rows, columns, entries and group members are visited in document order.

use crate::config::FeedLayout;
use crate::error::FeedShapeError;
use crate::feed::select_rows;
use crate::models::{AddressRecord, FeedEntry};
use serde_json::Value;

/// Extract all address records using the default feed layout.
pub fn extract(document: &Value) -> Result<Vec<AddressRecord>, FeedShapeError> {
    extract_with_layout(document, &FeedLayout::default())
}

/// Extract all address records.
///
/// Only a missing mandatory section path is an error. Below it, missing or
/// oddly typed fields give `None`/`false` and non-object items are skipped.
pub fn extract_with_layout(
    document: &Value,
    layout: &FeedLayout,
) -> Result<Vec<AddressRecord>, FeedShapeError> {
    let rows = select_rows(document, layout)?;
    let mut records = Vec::new();

    for row in &rows {
        for col in array_field(row, "cols") {
            for item in array_field(col, "data") {
                match FeedEntry::from_value(item) {
                    Some(entry) => records.extend(entry.into_records()),
                    None => log::debug!("Skipping non-object entry: {item}"),
                }
            }
        }
    }

    log::info!(
        "Extracted {} records from {} regions ({} not ready)",
        records.len(),
        rows.len(),
        records.iter().filter(|r| !r.ready).count()
    );
    Ok(records)
}

/// Elements of `value[key]`, empty when absent or not an array.
fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
