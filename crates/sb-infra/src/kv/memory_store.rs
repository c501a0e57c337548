use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use sb_core::ports::{FlagStoreError, KeyValueStorePort};

/// Process-local store. Nothing survives a restart unless the same
/// instance is shared, which is what tests use it for.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl KeyValueStorePort for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_entry_is_visible() {
        let store = InMemoryKeyValueStore::with_entry("hasLaunched", "true");
        assert_eq!(
            store.get("hasLaunched").await.unwrap(),
            Some("true".to_string())
        );
        assert_eq!(store.get("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "a").await.unwrap();
        store.set("k", "b").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("b".to_string()));
    }
}
