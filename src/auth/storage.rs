//! Persistence backends for the session record
//!
//! The session store keeps a single serialized user under one key. Any
//! key/value backend can hold it; two are provided.

use crate::utils::error::{Result, TrackerError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::debug;

/// String key/value storage surviving across session store instances
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local storage, lost on restart
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Storage backed by a JSON object file mapping keys to strings
///
/// Every write rewrites the whole file into a sibling temp file and renames it
/// over the original, so readers see either the old or the new contents.
/// Writers are serialized by an async lock so concurrent updates do not drop
/// each other's keys.
#[derive(Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl FileSessionStorage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                TrackerError::storage(format!(
                    "Session file {} is not a JSON object of strings: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(TrackerError::storage(format!(
                "Failed to read session file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(entries)?;
        let staging = self.staging_path();
        let write_err = |e: std::io::Error| {
            TrackerError::storage(format!(
                "Failed to write session file {}: {}",
                self.path.display(),
                e
            ))
        };
        tokio::fs::write(&staging, content).await.map_err(write_err)?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(write_err)
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        debug!("Reading '{}' from {}", key, self.path.display());
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value);
        self.save(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.save(&entries).await?;
        }
        Ok(())
    }
}
