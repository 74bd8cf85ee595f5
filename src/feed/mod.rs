//! Vendor feed access.
//!
//! - [`fetch`] - HTTP retrieval and offline loading of the raw document
//! - [`schema`] - matching the mandatory section path of the document

mod fetch;
mod schema;

pub use fetch::{fetch_feed, load_feed, read_feed_file};
pub use schema::select_rows;
