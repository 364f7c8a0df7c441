use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::common::Identifiable;

/// Whether a transaction adds to or draws from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Account a transaction settles against. `Secondary` models the savings
/// account on dashboards that split balances.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Account {
    #[default]
    Primary,
    Secondary,
}

/// A single recorded movement of money. Immutable once recorded; removal is
/// the only supported mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub date: NaiveDate,
    pub description: String,
    /// Signed amount: positive for income, negative for expense.
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Category,
    #[serde(default)]
    pub account: Account,
}

impl Transaction {
    pub fn new(
        id: u64,
        date: NaiveDate,
        description: impl Into<String>,
        magnitude: f64,
        kind: TransactionKind,
        category: Category,
        account: Account,
    ) -> Self {
        let amount = match kind {
            TransactionKind::Income => magnitude,
            TransactionKind::Expense => -magnitude,
        };
        Self {
            id,
            date,
            description: description.into(),
            amount,
            kind,
            category,
            account,
        }
    }

    /// Absolute size of the movement regardless of direction.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn income_carries_positive_sign() {
        let txn = Transaction::new(
            1,
            sample_date(),
            "Paycheck",
            1000.0,
            TransactionKind::Income,
            Category::Other,
            Account::Primary,
        );
        assert_eq!(txn.amount, 1000.0);
        assert_eq!(txn.magnitude(), 1000.0);
    }

    #[test]
    fn expense_carries_negative_sign() {
        let txn = Transaction::new(
            2,
            sample_date(),
            "Groceries",
            150.0,
            TransactionKind::Expense,
            Category::Food,
            Account::Primary,
        );
        assert_eq!(txn.amount, -150.0);
        assert_eq!(txn.magnitude(), 150.0);
    }
}
