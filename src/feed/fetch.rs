//! Loading the raw vendor document, over HTTP or from a saved file.

use crate::config::Source;
use crate::error::Error;
use colored::Colorize;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

/// Fetch the feed document from `url`.
///
/// Non-2xx responses and undecodable bodies are [`Error::Transport`]. No retries.
pub async fn fetch_feed(url: &str, timeout: Duration) -> Result<Value, Error> {
    log::info!("Fetching from: {}", url.on_blue());
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    log::debug!("Response status: {}", response.status());
    let document = response.json::<Value>().await?;
    Ok(document)
}

/// Read a previously downloaded feed document.
pub fn read_feed_file(path: &Path) -> Result<Value, Error> {
    log::info!("Reading feed from file: {}", path.display());
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the document from whichever source is configured.
pub async fn load_feed(source: &Source, timeout: Duration) -> Result<Value, Error> {
    match source {
        Source::Url(url) => fetch_feed(url, timeout).await,
        Source::File(path) => read_feed_file(path),
    }
}
