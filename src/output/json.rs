//! JSON file output.

use crate::error::Error;
use serde::Serialize;
use std::path::Path;

/// Save `data` as a pretty printed JSON array, two space indent.
pub fn save_as_json<T: Serialize>(data: &[T], path: &Path) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json + "\n").map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Saved {} entries to {}", data.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddressRecord, NetworkBlock};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("{}_{name}", std::process::id()))
    }

    #[test]
    fn test_save_records() {
        let path = temp_path("records.json");
        let records = vec![AddressRecord::ready("185.46.212.88")];
        save_as_json(&records, &path).expect("Error saving records");

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"ip_address\": \"185.46.212.88\""));
        let back: Vec<AddressRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, records);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_blocks() {
        let path = temp_path("blocks.json");
        let blocks: Vec<NetworkBlock> = vec![
            NetworkBlock::from("147.161.174.0/23".parse::<ipnet::IpNet>().unwrap()),
            NetworkBlock::from("2400:7aa0::/32".parse::<ipnet::IpNet>().unwrap()),
        ];
        save_as_json(&blocks, &path).expect("Error saving blocks");

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"ip_address": "147.161.174.0/23"},
                {"ip_address": "2400:7aa0::/32"}
            ])
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_empty_and_bad_path() {
        let path = temp_path("empty.json");
        save_as_json::<NetworkBlock>(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
        std::fs::remove_file(&path).ok();

        let err = save_as_json::<NetworkBlock>(&[], Path::new("/nonexistent_dir/x/out.json"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
