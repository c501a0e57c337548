//! # Configuration Loader
//!
//! Reads a TOML file and maps it onto the `AppConfig` DTO. Pure data
//! loading: no validation and no defaults. An empty data directory or a
//! zero hand-off delay is passed through as is and resolved by wiring.

use anyhow::Context;
use std::path::PathBuf;

use sb_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [storage]
            data_dir = "/var/lib/safebuddy"
            flag_file = "flags.json"

            [splash]
            handoff_ms = 250

            [logging]
            file_logging = true
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/safebuddy"));
        assert_eq!(config.flag_file, "flags.json");
        assert_eq!(config.splash_handoff_ms, 250);
        assert!(config.file_logging);
    }

    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let temp_file = write_config(
            r#"
            [storage]
            # data_dir is missing

            [splash]
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let temp_file = write_config("[storage\ndata_dir = ");

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_load_config_returns_io_error_on_file_not_found() {
        let non_existent_path = PathBuf::from("/this/path/does/not/exist/config.toml");

        let err = load_config(non_existent_path).unwrap_err();

        assert!(
            err.to_string().contains("Failed to read config file"),
            "Expected IO error message, got: {}",
            err
        );
    }
}
