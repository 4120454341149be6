//! Handle-to-channel directory loaded from `channels.json`.
//!
//! The file is optional. A missing, oversized, or malformed file yields
//! [`Directory::Unavailable`]; the reason is only visible at debug level.
//! Whether that should stay silent for a present-but-broken file is an
//! open question, so the behavior is kept and the cause is logged.
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Default directory file name, resolved against the working directory.
pub const CHANNELS_FILE: &str = "channels.json";

/// Maximum directory file size (1 MB).
const MAX_FILE_SIZE: u64 = 1_048_576;

/// On-disk shape: `{ "channels": { "@name": "UC...", ... } }`.
#[derive(Debug, Deserialize)]
struct ChannelsFile {
    channels: Map<String, Value>,
}

/// A validated handle-to-identifier mapping.
#[derive(Debug, Clone, Default)]
pub struct ChannelDirectory {
    channels: Map<String, Value>,
}

impl ChannelDirectory {
    /// Looks up the channel identifier for a normalized handle.
    ///
    /// Entries whose value is not a non-empty string are treated as absent.
    pub fn get(&self, handle: &str) -> Option<&str> {
        self.channels
            .get(handle)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

/// Result of loading the directory file.
#[derive(Debug, Clone)]
pub enum Directory {
    Loaded(ChannelDirectory),
    Unavailable,
}

impl Directory {
    /// Loads the directory at `path`.
    ///
    /// Never fails: every read or parse problem degrades to
    /// [`Directory::Unavailable`] and is reported through `tracing`.
    pub fn load(path: &Path) -> Self {
        match read_directory(path) {
            Ok(directory) => {
                tracing::debug!(
                    path = %path.display(),
                    entries = directory.len(),
                    "Loaded channel directory"
                );
                Directory::Loaded(directory)
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                tracing::debug!(
                    path = %path.display(),
                    error = %reason,
                    "Channel directory unavailable"
                );
                Directory::Unavailable
            }
        }
    }

    /// Parses directory content that has already been read.
    pub fn from_json(content: &str) -> Self {
        match parse_directory(content) {
            Ok(directory) => Directory::Loaded(directory),
            Err(e) => {
                tracing::debug!(error = %e, "Channel directory content rejected");
                Directory::Unavailable
            }
        }
    }
}

fn read_directory(path: &Path) -> Result<ChannelDirectory> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat '{}'", path.display()))?;
    if meta.len() > MAX_FILE_SIZE {
        tracing::warn!(
            path = %path.display(),
            size = meta.len(),
            max = MAX_FILE_SIZE,
            "Channel directory file too large, ignoring"
        );
        bail!(
            "'{}' is {} bytes (max {} bytes)",
            path.display(),
            meta.len(),
            MAX_FILE_SIZE
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    parse_directory(&content).with_context(|| format!("Invalid JSON in '{}'", path.display()))
}

fn parse_directory(content: &str) -> Result<ChannelDirectory> {
    let file: ChannelsFile = serde_json::from_str(content)?;
    Ok(ChannelDirectory {
        channels: file.channels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(directory: Directory) -> ChannelDirectory {
        match directory {
            Directory::Loaded(d) => d,
            Directory::Unavailable => panic!("Expected Loaded, got Unavailable"),
        }
    }

    #[test]
    fn test_from_json_valid() {
        let dir = loaded(Directory::from_json(
            r#"{"channels":{"@x":"UC2D2CMWXMOVWx7giW1n3LIg","@y":"UC_x5XG1OV2P6uZZ5FSM9Ttw"}}"#,
        ));
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.get("@x"), Some("UC2D2CMWXMOVWx7giW1n3LIg"));
        assert_eq!(dir.get("@missing"), None);
    }

    #[test]
    fn test_from_json_empty_channels_is_loaded() {
        let dir = loaded(Directory::from_json(r#"{"channels":{}}"#));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_from_json_extra_keys_accepted() {
        let dir = loaded(Directory::from_json(
            r#"{"version":2,"channels":{"@x":"UC2D2CMWXMOVWx7giW1n3LIg"}}"#,
        ));
        assert_eq!(dir.get("@x"), Some("UC2D2CMWXMOVWx7giW1n3LIg"));
    }

    #[test]
    fn test_from_json_invalid_is_unavailable() {
        assert!(matches!(
            Directory::from_json("not json {"),
            Directory::Unavailable
        ));
    }

    #[test]
    fn test_from_json_missing_channels_is_unavailable() {
        assert!(matches!(
            Directory::from_json(r#"{"feeds":{}}"#),
            Directory::Unavailable
        ));
    }

    #[test]
    fn test_from_json_channels_wrong_type_is_unavailable() {
        assert!(matches!(
            Directory::from_json(r#"{"channels":null}"#),
            Directory::Unavailable
        ));
        assert!(matches!(
            Directory::from_json(r#"{"channels":"@x"}"#),
            Directory::Unavailable
        ));
    }

    #[test]
    fn test_non_string_values_are_absent() {
        let dir = loaded(Directory::from_json(
            r#"{"channels":{"@num":42,"@empty":"","@null":null}}"#,
        ));
        assert_eq!(dir.get("@num"), None);
        assert_eq!(dir.get("@empty"), None);
        assert_eq!(dir.get("@null"), None);
    }

    #[test]
    fn test_load_missing_file_is_unavailable() {
        let path = Path::new("/tmp/ytfeed_test_nonexistent_channels.json");
        assert!(matches!(Directory::load(path), Directory::Unavailable));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = std::env::temp_dir().join("ytfeed_directory_test_load");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CHANNELS_FILE);
        std::fs::write(&path, r#"{"channels":{"@x":"UC2D2CMWXMOVWx7giW1n3LIg"}}"#).unwrap();

        let directory = loaded(Directory::load(&path));
        assert_eq!(directory.get("@x"), Some("UC2D2CMWXMOVWx7giW1n3LIg"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_malformed_file_is_unavailable() {
        let dir = std::env::temp_dir().join("ytfeed_directory_test_malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CHANNELS_FILE);
        std::fs::write(&path, "{\"channels\": [").unwrap();

        assert!(matches!(Directory::load(&path), Directory::Unavailable));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_too_large_file_is_unavailable() {
        let dir = std::env::temp_dir().join("ytfeed_directory_test_too_large");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CHANNELS_FILE);
        std::fs::write(&path, " ".repeat(1_048_577)).unwrap();

        assert!(matches!(Directory::load(&path), Directory::Unavailable));

        std::fs::remove_dir_all(&dir).ok();
    }
}
