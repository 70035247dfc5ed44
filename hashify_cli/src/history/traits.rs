//! History store trait definitions

use crate::history::{HistoryEntry, Result};
use async_trait::async_trait;

/// Trait for hash history implementations
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Record an entry
    ///
    /// The entry becomes the newest one. When the store is full the oldest
    /// entry is dropped.
    async fn append(&self, entry: HistoryEntry) -> Result<()>;

    /// All entries, newest first
    async fn list(&self) -> Result<Vec<HistoryEntry>>;

    /// Remove every entry
    async fn clear(&self) -> Result<()>;

    /// Number of stored entries
    async fn len(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }

    /// Whether the store has no entries
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
