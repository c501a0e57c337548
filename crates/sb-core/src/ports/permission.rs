use async_trait::async_trait;

use crate::permission::PermissionStatus;
use crate::ports::errors::PermissionError;

/// Platform permission APIs.
///
/// Each call is one asynchronous round trip with the user. Implementations
/// report what the platform says; normalisation to granted/denied happens in
/// the application layer.
#[async_trait]
pub trait PermissionGatewayPort: Send + Sync {
    async fn request_location(&self) -> Result<PermissionStatus, PermissionError>;

    async fn request_notifications(&self) -> Result<PermissionStatus, PermissionError>;
}
