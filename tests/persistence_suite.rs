mod common;

use std::fs;

use common::{sample_date, scratch_dir, setup_storage};
use finance_core::core::services::{BudgetService, GoalService, TransactionService};
use finance_core::domain::{Category, TransactionKind};
use finance_core::errors::FinanceError;
use finance_core::ledger::FinancialState;
use finance_core::storage::{StorageBackend, EXPORT_FILE_NAME};

fn populated_state() -> FinancialState {
    let mut state = FinancialState::new();
    let today = sample_date(2025, 3, 10);
    TransactionService::add(
        &mut state,
        "Paycheck",
        "1000",
        TransactionKind::Income,
        "Other",
        today,
        None,
    )
    .unwrap();
    TransactionService::add(
        &mut state,
        "Groceries",
        "150",
        TransactionKind::Expense,
        "Food",
        today,
        None,
    )
    .unwrap();
    BudgetService::set_limit(&mut state, "Food", "100").unwrap();
    GoalService::add(&mut state, "Vacation", "2000", "500", sample_date(2025, 12, 31)).unwrap();
    state.debt = 400.0;
    state
}

#[test]
fn snapshot_round_trips_the_whole_aggregate() {
    let storage = setup_storage();
    let state = populated_state();
    storage.save(&state).expect("save snapshot");

    let loaded = storage.load().expect("load snapshot");
    assert_eq!(loaded.transactions, state.transactions);
    assert_eq!(loaded.goals, state.goals);
    assert_eq!(loaded.budgets, state.budgets);
    assert_eq!(loaded.debt, 400.0);
    assert_eq!(loaded.totals(), state.totals());
}

#[test]
fn ids_stay_unique_after_a_reload() {
    let storage = setup_storage();
    storage.save(&populated_state()).expect("save snapshot");

    let mut loaded = storage.load().expect("load snapshot");
    let txn = TransactionService::add(
        &mut loaded,
        "Coffee",
        "4.50",
        TransactionKind::Expense,
        "Food",
        sample_date(2025, 3, 11),
        None,
    )
    .unwrap();
    let occurrences = loaded
        .transactions
        .iter()
        .filter(|existing| existing.id == txn.id)
        .count();
    assert_eq!(occurrences, 1);
}

#[test]
fn blob_missing_fields_defaults_instead_of_failing() {
    let storage = setup_storage();
    let path = scratch_dir().join("legacy.json");
    // An older export with no debt, goals, or budget fields.
    fs::write(
        &path,
        r#"{
            "balance": 850,
            "income": 1000,
            "expenses": 150,
            "transactions": [
                {
                    "id": 1,
                    "date": "2025-03-10",
                    "description": "Paycheck",
                    "amount": 1000.0,
                    "kind": "Income",
                    "category": "Other"
                }
            ]
        }"#,
    )
    .unwrap();

    let loaded = storage.import_from_path(&path).expect("tolerant import");
    assert_eq!(loaded.debt, 0.0);
    assert!(loaded.goals.is_empty());
    assert!(loaded.budgets.is_empty());
    // The missing account field defaults to the primary account.
    assert_eq!(loaded.savings_balance(), 0.0);
    assert_eq!(loaded.income_total(), 1000.0);
}

#[test]
fn malformed_import_leaves_current_state_untouched() {
    let storage = setup_storage();
    let state = populated_state();
    let path = scratch_dir().join("broken.json");
    fs::write(&path, "{\"transactions\": [{\"id\": \"not a number\"}]}").unwrap();

    let result = storage.import_from_path(&path);
    assert!(matches!(result, Err(FinanceError::Deserialization(_))));

    // The running aggregate is only replaced on success.
    assert_eq!(state.transactions.len(), 2);
    assert_eq!(state.income_total(), 1000.0);
    assert_eq!(state.category_total(Category::Food), 150.0);
}

#[test]
fn export_then_import_is_lossless() {
    let storage = setup_storage();
    let state = populated_state();
    let dir = scratch_dir();

    let exported = storage.export_to_dir(&state, &dir).expect("export");
    assert!(exported.ends_with(EXPORT_FILE_NAME));

    let imported = storage.import_from_path(&exported).expect("import");
    assert_eq!(imported.transactions, state.transactions);
    assert_eq!(imported.goals, state.goals);
    assert_eq!(imported.debt, state.debt);
}
