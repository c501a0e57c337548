use std::path::PathBuf;

use sb_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

/// Resolves the data root from the platform's data-local directory
/// (`~/.local/share`, `%LOCALAPPDATA%`, `~/Library/Application Support`).
#[derive(Default)]
pub struct DirsAppDirsAdapter {
    base: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self { base: None }
    }

    /// Resolve under `base` instead of the platform directory.
    pub fn with_base(base: PathBuf) -> Self {
        Self { base: Some(base) }
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base = match &self.base {
            Some(base) => base.clone(),
            None => dirs::data_local_dir().ok_or(AppDirsError::DataLocalDirUnavailable)?,
        };
        Ok(AppDirs::under(&base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_override_gets_safebuddy_dir() {
        let dirs = DirsAppDirsAdapter::with_base(PathBuf::from("/tmp/base"))
            .get_app_dirs()
            .unwrap();
        assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/base/safebuddy"));
    }

    #[test]
    fn platform_dir_resolves_or_reports_unavailable() {
        match DirsAppDirsAdapter::new().get_app_dirs() {
            Ok(dirs) => assert!(dirs.app_data_root.ends_with("safebuddy")),
            Err(err) => assert!(matches!(err, AppDirsError::DataLocalDirUnavailable)),
        }
    }
}
