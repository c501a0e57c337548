//! File-based key-value store
//!
//! Persists string pairs as a flat JSON object in the application data
//! directory. The whole file is rewritten on every `set`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use sb_core::app_dirs::DEFAULT_FLAG_STORE_FILE;
use sb_core::ports::{FlagStoreError, KeyValueStorePort};

type Entries = BTreeMap<String, String>;

pub struct FileKeyValueStore {
    store_file_path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create store with custom file path
    pub fn new(store_file_path: PathBuf) -> Self {
        Self {
            store_file_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Create store with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self::new(base_dir.join(filename.into()))
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_FLAG_STORE_FILE))
    }

    pub fn path(&self) -> &PathBuf {
        &self.store_file_path
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.store_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn load_entries(&self) -> anyhow::Result<Entries> {
        if !fs::try_exists(&self.store_file_path).await? {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.store_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read store file: {}", e))?;

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse store file: {}", e))
    }

    async fn write_entries(&self, entries: &Entries) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| anyhow::anyhow!("Failed to serialize store entries: {}", e))?;

        let mut file = fs::File::create(&self.store_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create store file: {}", e))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write store file: {}", e))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync store file: {}", e))?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        let entries = self
            .load_entries()
            .await
            .map_err(|e| FlagStoreError::ReadFailure(format!("{e:#}")))?;

        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self
            .load_entries()
            .await
            .map_err(|e| FlagStoreError::WriteFailure(format!("{e:#}")))?;
        entries.insert(key.to_string(), value.to_string());

        self.write_entries(&entries)
            .await
            .map_err(|e| FlagStoreError::WriteFailure(format!("{e:#}")))?;

        debug!(key, path = %self.store_file_path.display(), "store entry written");
        Ok(())
    }
}
