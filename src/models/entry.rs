//! Entries of a vendor feed column.
//!
//! A column entry is either a single address or a "multivip" group of
//! addresses. The decision is made once, in [`FeedEntry::from_value`], and the
//! rest of the code only matches on the variant.

use super::AddressRecord;
use serde_json::Value;

/// Note id the vendor uses to flag an address as not yet active.
///
/// Compared numerically, `3` and `3.0` are the same id.
pub const NOT_READY_NOTE_ID: f64 = 3.0;

/// A single address entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafEntry {
    pub address: Option<String>,
    pub region: Option<String>,
    pub location: Option<String>,
    pub ready: bool,
}

/// An entry of a feed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEntry {
    Leaf(LeafEntry),
    Group(Vec<LeafEntry>),
}

impl LeafEntry {
    /// Read a leaf from a JSON object. Missing or non-string fields become `None`.
    ///
    /// Returns `None` when `value` is not an object at all.
    pub fn from_value(value: &Value) -> Option<LeafEntry> {
        let obj = value.as_object()?;
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        Some(LeafEntry {
            address: text("ip_address"),
            region: text("region"),
            location: text("location"),
            ready: !has_not_ready_note(obj.get("notes")),
        })
    }

    pub fn into_record(self, is_group: bool) -> AddressRecord {
        AddressRecord {
            address: self.address,
            region: self.region,
            location: self.location,
            is_group,
            ready: self.ready,
        }
    }
}

impl FeedEntry {
    /// Classify a JSON column entry.
    ///
    /// Group members are always read as leaves, nested groups are not followed.
    pub fn from_value(value: &Value) -> Option<FeedEntry> {
        if !is_truthy(value.get("multivip")) {
            return LeafEntry::from_value(value).map(FeedEntry::Leaf);
        }
        let members = value
            .get("data")
            .and_then(Value::as_array)
            .map(|subs| {
                subs.iter()
                    .filter_map(|sub| {
                        let leaf = LeafEntry::from_value(sub);
                        if leaf.is_none() {
                            log::debug!("Skipping non-object group member: {sub}");
                        }
                        leaf
                    })
                    .collect()
            })
            .unwrap_or_default();
        Some(FeedEntry::Group(members))
    }

    /// Flatten into records, group members keep their order.
    pub fn into_records(self) -> Vec<AddressRecord> {
        match self {
            FeedEntry::Leaf(leaf) => vec![leaf.into_record(false)],
            FeedEntry::Group(members) => members
                .into_iter()
                .map(|leaf| leaf.into_record(true))
                .collect(),
        }
    }
}

fn has_not_ready_note(notes: Option<&Value>) -> bool {
    notes
        .and_then(Value::as_array)
        .map(|notes| {
            notes
                .iter()
                .any(|note| note.get("id").and_then(Value::as_f64) == Some(NOT_READY_NOTE_ID))
        })
        .unwrap_or(false)
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}
