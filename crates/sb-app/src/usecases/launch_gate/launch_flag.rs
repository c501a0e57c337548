use std::sync::Arc;

use sb_core::launch::LaunchFlag;
use sb_core::ports::{FlagStoreError, KeyValueStorePort};

/// Typed access to the `hasLaunched` marker on top of the generic store.
pub struct LaunchFlagRepository {
    store: Arc<dyn KeyValueStorePort>,
}

impl LaunchFlagRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// Whether the app has been opened on this install before.
    pub async fn has_launched(&self) -> Result<bool, FlagStoreError> {
        let stored = self.store.get(LaunchFlag::KEY).await?;
        Ok(LaunchFlag::is_launched(stored.as_deref()))
    }

    pub async fn mark_launched(&self) -> Result<(), FlagStoreError> {
        self.store.set(LaunchFlag::KEY, LaunchFlag::VALUE).await
    }
}
