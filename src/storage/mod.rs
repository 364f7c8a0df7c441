pub mod json_backend;

use std::path::Path;

use crate::{errors::Result, ledger::FinancialState};

/// Name of the file produced by a dashboard export.
pub const EXPORT_FILE_NAME: &str = "financial_data.json";

/// Abstraction over persistence backends storing the dashboard snapshot.
/// Saves overwrite the whole snapshot; there are no partial updates.
pub trait StorageBackend: Send + Sync {
    fn save(&self, state: &FinancialState) -> Result<()>;
    fn load(&self) -> Result<FinancialState>;

    /// Optional helpers for ad-hoc file operations backing import/export.
    /// Default implementations forward to the JSON snapshot codec.
    fn export_to_path(&self, state: &FinancialState, path: &Path) -> Result<()> {
        json_backend::save_snapshot_to_path(state, path)
    }

    fn import_from_path(&self, path: &Path) -> Result<FinancialState> {
        json_backend::load_snapshot_from_path(path)
    }
}

pub use json_backend::{JsonStorage, Snapshot};
