//! Persistent key-value store port
//!
//! Durable across process restarts. The onboarding subsystem only ever uses
//! one key, but the contract stays generic like the platform stores it wraps.

use async_trait::async_trait;

use crate::ports::errors::FlagStoreError;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read a value. `Ok(None)` means the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), FlagStoreError>;
}
