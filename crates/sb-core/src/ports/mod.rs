//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The launch gate and the onboarding
//! orchestrator only ever talk to the outside world through these traits,
//! so tests can substitute doubles for the store, the platform permission
//! APIs and the router.

pub mod app_dirs;
pub mod errors;
pub mod key_value_store;
pub mod navigation;
pub mod permission;
pub mod prompt;

pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, FlagStoreError, PermissionError};
pub use key_value_store::KeyValueStorePort;
pub use navigation::NavigationPort;
pub use permission::PermissionGatewayPort;
pub use prompt::PromptPort;
