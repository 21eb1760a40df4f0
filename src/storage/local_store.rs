//! Local document store
//!
//! A directory of JSON documents, one file per key. This is the offline
//! fallback for admin content and the home of curator chapter overrides,
//! mirroring what the web app keeps in browser storage.

use serde_json::Value;
use std::path::PathBuf;
use tracing::warn;

use crate::error::Result;
use crate::models::content::Chapter;
use crate::storage::keys;

/// Directory-backed JSON document store
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read a document. Any failure (missing file, bad JSON) is a miss;
    /// bad JSON additionally gets a warning since it means a corrupt cache.
    pub async fn get(&self, key: &str) -> Option<Value> {
        let path = self.path_for(key);
        let content = tokio::fs::read_to_string(&path).await.ok()?;

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("corrupt cache document {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Write a document, creating the directory on first use.
    pub async fn put(&self, key: &str, value: &Value) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(key);
        let content = serde_json::to_string_pretty(value)?;
        tokio::fs::write(&path, content).await?;
        Ok(())
    }

    /// Curator-provided chapter list for a cache key, if one exists.
    pub async fn custom_chapters(&self, cache_key: &str) -> Option<Vec<Chapter>> {
        let value = self.get(&keys::custom_chapters_key(cache_key)).await?;
        match serde_json::from_value::<Vec<Chapter>>(value) {
            Ok(chapters) => Some(chapters),
            Err(e) => {
                warn!("custom chapters for {} are malformed: {}", cache_key, e);
                None
            }
        }
    }
}
