//! # Dependency Injection
//!
//! The only place that depends on sb-infra, sb-platform and sb-app at once.
//! It assembles adapters behind their ports and decides nothing else.

use std::sync::Arc;

use sb_app::app_paths::AppPaths;
use sb_core::app_dirs::AppDirs;
use sb_core::config::AppConfig;
use sb_core::navigation::Route;
use sb_core::ports::{AppDirsPort, KeyValueStorePort, PermissionGatewayPort, PromptPort};
use sb_infra::kv::FileKeyValueStore;
use sb_platform::{ConsoleIo, ConsolePermissionGateway, DirsAppDirsAdapter};

use crate::adapters::{ConsoleNavigator, ConsolePromptPresenter};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Application directory resolution failed: {0}")]
    AppDirs(String),
}

/// Everything a shell session runs on.
pub struct ShellDeps {
    pub paths: AppPaths,
    pub store: Arc<dyn KeyValueStorePort>,
    pub permissions: Arc<dyn PermissionGatewayPort>,
    pub navigation: Arc<ConsoleNavigator>,
    pub prompts: Arc<dyn PromptPort>,
    pub console: ConsoleIo,
    pub splash_handoff_ms: u64,
}

/// Data root from config, or the platform data-local directory when the
/// config leaves it empty.
pub fn resolve_app_paths(config: &AppConfig) -> WiringResult<AppPaths> {
    let dirs = if config.data_dir.as_os_str().is_empty() {
        DirsAppDirsAdapter::new()
            .get_app_dirs()
            .map_err(|e| WiringError::AppDirs(e.to_string()))?
    } else {
        AppDirs::at(config.data_dir.clone())
    };

    Ok(AppPaths::with_flag_file(&dirs, &config.flag_file))
}

/// Assemble the session's adapters over already resolved `paths`.
pub fn wire_dependencies(config: &AppConfig, paths: AppPaths, console: ConsoleIo) -> ShellDeps {
    let store: Arc<dyn KeyValueStorePort> =
        Arc::new(FileKeyValueStore::new(paths.flag_store_path.clone()));
    let permissions: Arc<dyn PermissionGatewayPort> =
        Arc::new(ConsolePermissionGateway::new(console.clone()));
    let navigation = Arc::new(ConsoleNavigator::new(Route::Splash, console.clone()));
    let prompts: Arc<dyn PromptPort> = Arc::new(ConsolePromptPresenter::new(console.clone()));

    ShellDeps {
        paths,
        store,
        permissions,
        navigation,
        prompts,
        console,
        splash_handoff_ms: config.splash_handoff_ms,
    }
}
