//! Error types.
//!
//! Structural problems with the vendor feed ([`FeedShapeError`]) are fatal and
//! kept apart from transport failures so a caller can decide what to retry.
//! A single unparseable address is only a [`RecordParseWarning`].

use std::path::PathBuf;
use thiserror::Error;

/// The mandatory section path of the vendor document is missing or has the wrong type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unexpected feed shape at '{path}': {reason}")]
pub struct FeedShapeError {
    /// JSON path where matching failed, e.g. `data[6].body.json.rows`.
    pub path: String,
    pub reason: String,
}

impl FeedShapeError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        FeedShapeError {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// A ready record whose address could not be turned into a network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordParseWarning {
    #[error("record #{index} has no address")]
    MissingAddress { index: usize },
    #[error("record #{index} has invalid address '{raw}': {reason}")]
    InvalidAddress {
        index: usize,
        raw: String,
        reason: String,
    },
}

/// Crate level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    FeedShape(#[from] FeedShapeError),
    #[error("failed to fetch feed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Error {
    /// True for failures where trying again later might help.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
