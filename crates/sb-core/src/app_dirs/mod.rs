//! Where SafeBuddy keeps its files.

use std::path::{Path, PathBuf};

/// Directory created under the platform's data-local directory.
pub const APP_DIR_NAME: &str = "safebuddy";

/// File holding the launch flag, inside the data root.
pub const DEFAULT_FLAG_STORE_FILE: &str = "launch_flags.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    /// SafeBuddy's own directory under a platform base directory.
    pub fn under(base: &Path) -> Self {
        Self {
            app_data_root: base.join(APP_DIR_NAME),
        }
    }

    /// A data root picked by the user, taken as is.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            app_data_root: root.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_appends_app_dir_name() {
        let dirs = AppDirs::under(Path::new("/home/u/.local/share"));
        assert_eq!(
            dirs.app_data_root,
            PathBuf::from("/home/u/.local/share/safebuddy")
        );
    }

    #[test]
    fn at_keeps_the_chosen_root() {
        assert_eq!(
            AppDirs::at("/srv/sb").app_data_root,
            PathBuf::from("/srv/sb")
        );
    }
}
