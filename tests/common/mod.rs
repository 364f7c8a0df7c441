use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;

use finance_core::storage::JsonStorage;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated JSON storage backed by a unique directory.
pub fn setup_storage() -> JsonStorage {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    JsonStorage::new(Some(base)).expect("create json storage backend")
}

/// Returns a scratch directory that survives until the end of the run.
pub fn scratch_dir() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
