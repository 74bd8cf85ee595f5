//! Address record processing.
//!
//! - [`extract`] - flatten the vendor table into [`AddressRecord`]s
//! - [`summarize`] - collapse ready records into [`NetworkBlock`]s
//! - [`collapse`] - per family minimal CIDR cover
//!
//! [`AddressRecord`]: crate::models::AddressRecord
//! [`NetworkBlock`]: crate::models::NetworkBlock

mod collapse;
mod extract;
mod summarize;

// Re-export public functions
pub use collapse::collapse;
pub use extract::{extract, extract_with_layout};
pub use summarize::{summarize, summarize_with_report, Summary};
