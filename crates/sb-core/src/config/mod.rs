//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation
//!
//! Missing values map to empty or zero facts. The shell decides what an
//! empty data directory or a zero hand-off delay means.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Data directory override (empty means "use the platform default")
    pub data_dir: PathBuf,

    /// File name of the persistent flag store inside the data directory
    pub flag_file: String,

    /// Delay between the splash screen settling and the first navigation
    pub splash_handoff_ms: u64,

    /// Whether the shell should also write logs to `<data_dir>/logs`
    pub file_logging: bool,
}

impl AppConfig {
    /// Map a parsed TOML document onto the DTO.
    ///
    /// No field is required; whatever the document holds is accepted as is.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            flag_file: toml_value
                .get("storage")
                .and_then(|s| s.get("flag_file"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            splash_handoff_ms: toml_value
                .get("splash")
                .and_then(|s| s.get("handoff_ms"))
                .and_then(|v| v.as_integer())
                .map(|ms| ms.max(0) as u64)
                .unwrap_or(0),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// An all-empty configuration, used when no config file is given.
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            flag_file: String::new(),
            splash_handoff_ms: 0,
            file_logging: false,
        }
    }
}
