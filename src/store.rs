//! Persistence collaborators: broadcast state and layout documents.
//!
//! DESIGN
//! ======
//! Storage sits behind two async traits. Two backends ship: `MemoryStore`
//! for tests and storeless runs, and `FileStore`, which keeps one JSON file
//! per record under a root directory.
//!
//! Layouts are loaded as raw document text; the session parses them and
//! handles malformed documents.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stage::doc::Layout;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;

// =============================================================================
// RECORDS
// =============================================================================

/// The persisted broadcast state, upserted by `id` on every Take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastRecord {
    pub id: String,
    pub preview: String,
    pub program: String,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

// =============================================================================
// TRAITS
// =============================================================================

/// Durable home for the broadcast state record.
#[async_trait::async_trait]
pub trait BroadcastStore: Send + Sync {
    /// Insert or replace the record keyed by `record.id`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write fails.
    async fn upsert(&self, record: &BroadcastRecord) -> Result<(), StoreError>;

    /// Read the record for `id`, if one was ever written.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the read fails or the record is corrupt.
    async fn load_broadcast(&self, id: &str) -> Result<Option<BroadcastRecord>, StoreError>;
}

/// Durable home for layout documents.
#[async_trait::async_trait]
pub trait LayoutStore: Send + Sync {
    /// Persist `layout` under its own id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if serialization or the write fails.
    async fn save_layout(&self, layout: &Layout) -> Result<(), StoreError>;

    /// Raw document text for `id`, unparsed.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the read fails.
    async fn load_layout(&self, id: &str) -> Result<Option<String>, StoreError>;
}

// =============================================================================
// MEMORY STORE
// =============================================================================

#[derive(Debug, Default)]
pub struct MemoryStore {
    broadcasts: RwLock<HashMap<String, BroadcastRecord>>,
    layouts: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw layout document, bypassing validation.
    pub async fn put_raw_layout(&self, id: impl Into<String>, json: impl Into<String>) {
        self.layouts.write().await.insert(id.into(), json.into());
    }
}

#[async_trait::async_trait]
impl BroadcastStore for MemoryStore {
    async fn upsert(&self, record: &BroadcastRecord) -> Result<(), StoreError> {
        self.broadcasts.write().await.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn load_broadcast(&self, id: &str) -> Result<Option<BroadcastRecord>, StoreError> {
        Ok(self.broadcasts.read().await.get(id).cloned())
    }
}

#[async_trait::async_trait]
impl LayoutStore for MemoryStore {
    async fn save_layout(&self, layout: &Layout) -> Result<(), StoreError> {
        let json = layout.to_json()?;
        self.layouts.write().await.insert(layout.id.clone(), json);
        Ok(())
    }

    async fn load_layout(&self, id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.layouts.read().await.get(id).cloned())
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// One JSON file per record: `<root>/broadcast/<id>.json` and
/// `<root>/layouts/<id>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, kind: &str, id: &str) -> Result<PathBuf, StoreError> {
        let safe = !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\']);
        if !safe {
            return Err(StoreError::Unavailable(format!("invalid record id '{id}'")));
        }
        Ok(self.root.join(kind).join(format!("{id}.json")))
    }

    /// Write via a temp file and rename so readers never see a torn document.
    ///
    /// Each write gets its own temp name; overlapping writes to one record
    /// all succeed and the last rename wins.
    async fn write_atomic(path: &Path, body: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = path.with_extension(format!("{}.tmp", Uuid::new_v4()));
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }

    async fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(path).await {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait::async_trait]
impl BroadcastStore for FileStore {
    async fn upsert(&self, record: &BroadcastRecord) -> Result<(), StoreError> {
        let path = self.path_for("broadcast", &record.id)?;
        let body = serde_json::to_vec_pretty(record)?;
        Self::write_atomic(&path, &body).await
    }

    async fn load_broadcast(&self, id: &str) -> Result<Option<BroadcastRecord>, StoreError> {
        let path = self.path_for("broadcast", id)?;
        match Self::read_optional(&path).await? {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }
}

#[async_trait::async_trait]
impl LayoutStore for FileStore {
    async fn save_layout(&self, layout: &Layout) -> Result<(), StoreError> {
        let path = self.path_for("layouts", &layout.id)?;
        let body = layout.to_json()?;
        Self::write_atomic(&path, body.as_bytes()).await
    }

    async fn load_layout(&self, id: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for("layouts", id)?;
        Self::read_optional(&path).await
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
