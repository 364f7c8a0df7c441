use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config,
    core::utils::ensure_dir,
    domain::{budget::BudgetLine, goal::Goal, profile::UserProfile, transaction::Transaction},
    errors::{FinanceError, Result},
    ledger::FinancialState,
};

use super::{StorageBackend, EXPORT_FILE_NAME};

const TMP_SUFFIX: &str = "tmp";

/// Wire shape of the persisted dashboard blob. Every field defaults, so
/// partial or older snapshots still load. The balance/income/expense
/// numbers are written for compatibility with existing exports; on load
/// the transaction list is the authority and totals are refolded from it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: f64,
    #[serde(default)]
    pub debt: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub budget_categories: Vec<BudgetLine>,
    #[serde(default)]
    pub user_data: Option<UserProfile>,
}

impl Snapshot {
    pub fn from_state(state: &FinancialState) -> Self {
        Self {
            balance: state.balance(),
            savings: state.savings_balance(),
            income: state.income_total(),
            expenses: state.expense_total(),
            debt: state.debt,
            transactions: state.transactions.clone(),
            goals: state.goals.clone(),
            budget_categories: state.budgets.clone(),
            user_data: state.profile.clone(),
        }
    }

    /// Rebuilds the aggregate. Totals come back from the transaction fold,
    /// not from the stored numbers, so a blob with stale counters cannot
    /// introduce drift.
    pub fn into_state(self) -> FinancialState {
        FinancialState::from_parts(
            self.transactions,
            self.goals,
            self.budget_categories,
            self.debt,
            self.user_data,
        )
    }
}

/// JSON file storage holding a single whole-state snapshot.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    snapshot_path: PathBuf,
}

impl JsonStorage {
    /// Creates a storage rooted at `root`, defaulting to the application
    /// data directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(config::app_data_dir);
        ensure_dir(&base)?;
        Ok(Self {
            snapshot_path: config::snapshot_file_in(&base),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Writes the export file (`financial_data.json`) into `dir` and
    /// returns its path.
    pub fn export_to_dir(&self, state: &FinancialState, dir: &Path) -> Result<PathBuf> {
        ensure_dir(dir)?;
        let path = dir.join(EXPORT_FILE_NAME);
        self.export_to_path(state, &path)?;
        Ok(path)
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, state: &FinancialState) -> Result<()> {
        save_snapshot_to_path(state, &self.snapshot_path)
    }

    /// Loads the snapshot, yielding the empty state when none has been
    /// saved yet (first launch).
    fn load(&self) -> Result<FinancialState> {
        if !self.snapshot_path.exists() {
            debug!("no snapshot on disk; starting empty");
            return Ok(FinancialState::default());
        }
        load_snapshot_from_path(&self.snapshot_path)
    }
}

pub fn save_snapshot_to_path(state: &FinancialState, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(&Snapshot::from_state(state))
        .map_err(|err| FinanceError::Storage(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Parses a snapshot file fully before returning; a malformed file yields
/// an error and no state, leaving the caller's state untouched.
pub fn load_snapshot_from_path(path: &Path) -> Result<FinancialState> {
    let data = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&data)?;
    Ok(snapshot.into_state())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
