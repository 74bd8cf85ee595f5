//! Domain models for the egress address feed.
//!
//! - [`AddressRecord`] - one flat address taken from the feed
//! - [`FeedEntry`] - a column entry, single address or multivip group
//! - [`NetworkBlock`] - a collapsed CIDR block
//! - [`Prefix`] - integer range view of IPv4/IPv6 prefixes

mod block;
mod entry;
mod network;
mod record;

// Re-export public types
pub use block::NetworkBlock;
pub use entry::{FeedEntry, LeafEntry, NOT_READY_NOTE_ID};
pub use network::{parse_network, Prefix};
pub use record::AddressRecord;
