use anyhow::Result;
use async_trait::async_trait;

use crate::navigation::{NavigationMode, Route};

/// Imperative router. Fire and forget: nothing flows back into the caller.
#[async_trait]
pub trait NavigationPort: Send + Sync {
    async fn navigate(&self, route: Route, mode: NavigationMode) -> Result<()>;
}
