//! Resolution of the on-disk locations used by the snapshot store.

use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".finance_core";
const SNAPSHOT_FILE: &str = "dashboard.json";

/// Returns the application data directory, defaulting to `~/.finance_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINANCE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the persisted dashboard snapshot inside `base`.
pub fn snapshot_file_in(base: &Path) -> PathBuf {
    base.join(SNAPSHOT_FILE)
}
