//! File-backed history store
//!
//! Entries are kept as a pretty-printed JSON array, newest first. The file is
//! read once when the store is opened and rewritten after every change by
//! writing a sibling temp file and renaming it over the original.

use crate::history::traits::HistoryStore;
use crate::history::{HistoryEntry, HistoryError, Result, push_capped};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// History persisted to a JSON file
pub struct FileHistoryStore {
    path: PathBuf,
    entries: RwLock<Vec<HistoryEntry>>,
    max_entries: usize,
}

impl FileHistoryStore {
    /// Open the history at `path`, keeping at most `max_entries`
    ///
    /// A missing file is an empty history. So is an unreadable or corrupt
    /// one; the problem is logged and the file is replaced on the next write.
    pub fn new(path: PathBuf, max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        let mut entries = Self::load_from_disk(&path);
        entries.truncate(max_entries);

        log::debug!(
            "Opened history at {} with {} entries",
            path.display(),
            entries.len()
        );

        Self {
            path,
            entries: RwLock::new(entries),
            max_entries,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_disk(path: &Path) -> Vec<HistoryEntry> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read history from {}: {e}", path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Ignoring corrupt history file {}: {e}", path.display());
                Vec::new()
            }
        }
    }

    async fn save_to_disk(&self, entries: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| HistoryError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let data = serde_json::to_vec_pretty(entries)?;

        // The target only ever holds a complete document
        let temp_path = self.temp_path();
        Self::write_synced(&temp_path, &data)
            .await
            .map_err(|source| HistoryError::Io {
                path: temp_path.clone(),
                source,
            })?;

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|source| HistoryError::Io {
                path: self.path.clone(),
                source,
            })?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    async fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .await?;
        file.write_all(data).await?;
        file.sync_all().await
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn append(&self, entry: HistoryEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        push_capped(&mut entries, entry, self.max_entries);
        self.save_to_disk(&entries).await
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.read().await.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.clear();
        self.save_to_disk(&entries).await
    }
}
