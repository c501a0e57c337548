use std::path::PathBuf;

use sb_core::app_dirs::{AppDirs, DEFAULT_FLAG_STORE_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub flag_store_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self::with_flag_file(dirs, DEFAULT_FLAG_STORE_FILE)
    }

    /// Same layout with a configured flag store file name. An empty name
    /// falls back to the default.
    pub fn with_flag_file(dirs: &AppDirs, flag_file: &str) -> Self {
        let flag_file = if flag_file.is_empty() {
            DEFAULT_FLAG_STORE_FILE
        } else {
            flag_file
        };
        Self {
            flag_store_path: dirs.app_data_root.join(flag_file),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
