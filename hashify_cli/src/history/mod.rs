//! Hash history for the hashify CLI
//!
//! Every successful non-empty digest from `hashify hash` is recorded, newest
//! first, up to a configurable cap. The store is a trait so the command code
//! does not depend on how entries are persisted.
//!
//! `history.enabled` only controls recording. Listing, clearing and exporting
//! always operate on the history file.

use crate::config::HistoryConfig;
use crate::paths;
use crate::record::DigestRecord;
use chrono::{DateTime, Utc};
use hashify_core::{HashAlgorithm, SaltPosition};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

pub mod file_store;
pub mod traits;

pub use file_store::FileHistoryStore;
pub use traits::HistoryStore;

/// Result type for history operations
pub type Result<T> = std::result::Result<T, HistoryError>;

/// Errors raised while persisting history
#[derive(Error, Debug)]
pub enum HistoryError {
    /// Reading or writing the history file failed
    #[error("History I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Entries could not be encoded
    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single recorded digest
///
/// Stored and exported as `{id, timestamp, input, algorithm, hash}` plus
/// `salt` and `saltPosition` for salted digests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "StoredEntry", from = "StoredEntry")]
pub struct HistoryEntry {
    /// Unique id, RFC 3339 timestamp plus a random suffix
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub record: DigestRecord,
}

/// On-disk shape of a history entry
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    id: String,
    timestamp: DateTime<Utc>,
    #[serde(alias = "text")]
    input: String,
    algorithm: HashAlgorithm,
    hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    salt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    salt_position: Option<SaltPosition>,
}

impl From<HistoryEntry> for StoredEntry {
    fn from(entry: HistoryEntry) -> Self {
        let DigestRecord {
            text,
            algorithm,
            hash,
            salt,
            salt_position,
        } = entry.record;

        Self {
            id: entry.id,
            timestamp: entry.timestamp,
            input: text,
            algorithm,
            hash,
            salt,
            salt_position,
        }
    }
}

impl From<StoredEntry> for HistoryEntry {
    fn from(stored: StoredEntry) -> Self {
        Self {
            id: stored.id,
            timestamp: stored.timestamp,
            record: DigestRecord {
                text: stored.input,
                algorithm: stored.algorithm,
                hash: stored.hash,
                salt: stored.salt,
                salt_position: stored.salt_position,
            },
        }
    }
}

impl HistoryEntry {
    /// Create an entry stamped with the current time
    pub fn new(record: DigestRecord) -> Self {
        Self::at(record, Utc::now())
    }

    /// Create an entry stamped with `timestamp`
    pub fn at(record: DigestRecord, timestamp: DateTime<Utc>) -> Self {
        let suffix: u64 = rand::random();
        Self {
            id: format!("{}-{suffix:016x}", timestamp.to_rfc3339()),
            timestamp,
            record,
        }
    }
}

/// Open the history file, capped by configuration
///
/// The store is opened whether or not recording is enabled; callers decide
/// whether to append.
pub fn create_store(config: &HistoryConfig) -> Arc<dyn HistoryStore> {
    Arc::new(FileHistoryStore::new(
        paths::get_history_path(),
        config.max_entries,
    ))
}

/// Insert `entry` at the front and drop anything past `max_entries`
pub(crate) fn push_capped(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry, max_entries: usize) {
    entries.insert(0, entry);
    entries.truncate(max_entries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashify_core::HashAlgorithm;

    fn record(text: &str) -> DigestRecord {
        DigestRecord {
            text: text.to_string(),
            algorithm: HashAlgorithm::MD5,
            hash: "5d41402abc4b2a76b9719d911017c592".to_string(),
            salt: None,
            salt_position: None,
        }
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let now = Utc::now();
        let a = HistoryEntry::at(record("a"), now);
        let b = HistoryEntry::at(record("a"), now);

        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with(&now.to_rfc3339()));
    }

    #[test]
    fn test_entry_serializes_flat() {
        let entry = HistoryEntry::new(record("hello"));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["input"], "hello");
        assert_eq!(json["algorithm"], "md5");
        assert!(json.get("text").is_none());
        assert!(json.get("record").is_none());
        assert!(json.get("salt").is_none());
    }

    #[test]
    fn test_salted_entry_round_trips() {
        let mut salted = record("hello");
        salted.salt = Some("pepper".to_string());
        salted.salt_position = Some(SaltPosition::Postfix);
        let entry = HistoryEntry::new(salted);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["saltPosition"], "postfix");

        let back: HistoryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_entries_written_with_text_still_load() {
        let json = serde_json::json!({
            "id": "2024-03-09T14:05:07+00:00-0000000000000001",
            "timestamp": "2024-03-09T14:05:07Z",
            "text": "hello",
            "algorithm": "md5",
            "hash": "5d41402abc4b2a76b9719d911017c592"
        });

        let entry: HistoryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(entry.record.text, "hello");
    }

    #[test]
    fn test_push_capped_keeps_newest_first() {
        let mut entries = Vec::new();
        for text in ["one", "two", "three"] {
            push_capped(&mut entries, HistoryEntry::new(record(text)), 2);
        }

        let texts: Vec<_> = entries.iter().map(|e| e.record.text.as_str()).collect();
        assert_eq!(texts, ["three", "two"]);
    }
}
