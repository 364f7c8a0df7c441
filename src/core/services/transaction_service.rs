//! Business logic helpers for recording and removing transactions.

use chrono::NaiveDate;
use tracing::debug;

use crate::core::services::{GoalService, ServiceResult};
use crate::core::utils::parse_amount;
use crate::domain::category::Category;
use crate::domain::transaction::{Account, Transaction, TransactionKind};
use crate::errors::FinanceError;
use crate::ledger::FinancialState;

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Records a new transaction and returns a copy of the stored record.
    ///
    /// The amount is taken as entered by the user and must be a
    /// non-negative number with at most two decimal places; the sign is
    /// derived from `kind`. Positive postings also advance goal progress.
    pub fn add(
        state: &mut FinancialState,
        description: &str,
        amount: &str,
        kind: TransactionKind,
        category: &str,
        date: NaiveDate,
        account: Option<Account>,
    ) -> ServiceResult<Transaction> {
        let description = description.trim();
        if description.is_empty() {
            return Err(FinanceError::Validation("description is required".into()));
        }
        let category: Category = category.parse()?;
        let magnitude = parse_amount(amount)?;
        let id = state.allocate_transaction_id();
        let txn = Transaction::new(
            id,
            date,
            description,
            magnitude,
            kind,
            category,
            account.unwrap_or_default(),
        );
        state.add_transaction(txn.clone());
        GoalService::on_income_posted(state, txn.amount);
        debug!(id, %category, amount = txn.amount, "transaction recorded");
        Ok(txn)
    }

    /// Removes the transaction identified by `id`, returning whether a
    /// record was deleted. Unknown ids are a logged no-op. Totals are
    /// derived from the list, so removal reverses the original posting
    /// exactly; goal progress earned from the amount is kept.
    pub fn delete(state: &mut FinancialState, id: u64) -> bool {
        match state.remove_transaction(id) {
            Some(txn) => {
                debug!(id, amount = txn.amount, "transaction removed");
                true
            }
            None => {
                debug!(id, "delete ignored; transaction not found");
                false
            }
        }
    }

    /// Returns the transactions, most recent first.
    pub fn list(state: &FinancialState) -> &[Transaction] {
        &state.transactions
    }
}
