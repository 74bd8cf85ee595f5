//! Expected shape of the vendor document.
//!
//! ```text
//! {
//!   "data": [
//!     ...,
//!     {                      <- data[section_index]
//!       "body": {
//!         "json": {
//!           "rows": [ header, region, region, ... ]
//!         }
//!       }
//!     },
//!     ...
//!   ]
//! }
//! ```
//!
//! Each region row is `{ "cols": [ { "data": [ entry, ... ] }, ... ] }`.
//! Only the path down to `rows` is mandatory; anything below it is read
//! leniently by the extractor.

use crate::config::FeedLayout;
use crate::error::FeedShapeError;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug)]
struct Section {
    body: Body,
}

#[derive(Deserialize, Debug)]
struct Body {
    json: Table,
}

#[derive(Deserialize, Debug)]
struct Table {
    rows: Vec<Value>,
}

/// Select the region rows of the egress table, header rows removed.
///
/// # Errors
/// [`FeedShapeError`] when `data`, the section at `layout.section_index`, or
/// its `body.json.rows` array is missing or of the wrong type.
pub fn select_rows(document: &Value, layout: &FeedLayout) -> Result<Vec<Value>, FeedShapeError> {
    let sections = document
        .get("data")
        .ok_or_else(|| FeedShapeError::new("data", "missing top level field"))?
        .as_array()
        .ok_or_else(|| FeedShapeError::new("data", "expected an array of sections"))?;

    let index = layout.section_index;
    let section = sections.get(index).ok_or_else(|| {
        FeedShapeError::new(
            format!("data[{index}]"),
            format!("feed has only {} sections", sections.len()),
        )
    })?;

    let section: Section = serde_path_to_error::deserialize(section).map_err(|e| {
        let path = match e.path().to_string().as_str() {
            "." => format!("data[{index}]"),
            inner => format!("data[{index}].{inner}"),
        };
        FeedShapeError::new(path, e.inner().to_string())
    })?;

    let rows = section.body.json.rows;
    log::debug!(
        "data[{index}].body.json.rows has {} rows, skipping {} header row(s)",
        rows.len(),
        layout.header_rows
    );
    Ok(rows.into_iter().skip(layout.header_rows).collect())
}
