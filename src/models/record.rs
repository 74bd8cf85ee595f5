//! Flat address record produced from the vendor feed.

use serde::{Deserialize, Serialize};

/// One vendor advertised address or range.
///
/// Serialized with the field names of the saved "full" output file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressRecord {
    /// Single IP literal or CIDR range, as published (untrusted).
    #[serde(rename = "ip_address")]
    pub address: Option<String>,
    pub region: Option<String>,
    pub location: Option<String>,
    /// Record came from a multi-address group.
    #[serde(rename = "multivip")]
    pub is_group: bool,
    /// False when the vendor flagged the address as not yet active.
    pub ready: bool,
}

impl AddressRecord {
    /// Ready record with only an address, mostly useful for tests and callers
    /// building records by hand.
    pub fn ready(address: &str) -> Self {
        AddressRecord {
            address: Some(address.to_string()),
            ready: true,
            ..Default::default()
        }
    }

    pub fn not_ready(address: &str) -> Self {
        AddressRecord {
            ready: false,
            ..AddressRecord::ready(address)
        }
    }
}
