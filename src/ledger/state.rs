use serde::{Deserialize, Serialize};

use crate::domain::{
    budget::BudgetLine,
    category::Category,
    common::Identifiable,
    goal::Goal,
    profile::UserProfile,
    transaction::{Account, Transaction, TransactionKind},
};

/// Aggregate dashboard state: the ordered transaction list plus everything
/// hanging off it. Balances, income, expenses, and category spend are folds
/// over `transactions`, so removing a transaction reverses its effect
/// exactly and totals can never drift from the list.
#[derive(Debug, Clone, Default)]
pub struct FinancialState {
    /// Most-recent-first; new transactions are prepended.
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub budgets: Vec<BudgetLine>,
    pub debt: f64,
    pub profile: Option<UserProfile>,
    transaction_seq: u64,
    goal_seq: u64,
}

/// Headline numbers for the dashboard summary tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LedgerTotals {
    pub balance: f64,
    pub savings: f64,
    pub income: f64,
    pub expenses: f64,
}

impl FinancialState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the aggregate from restored collections. Id sequences are
    /// re-seeded from the highest ids present so later inserts stay unique.
    pub fn from_parts(
        transactions: Vec<Transaction>,
        goals: Vec<Goal>,
        budgets: Vec<BudgetLine>,
        debt: f64,
        profile: Option<UserProfile>,
    ) -> Self {
        let transaction_seq = transactions.iter().map(|txn| txn.id).max().unwrap_or(0);
        let goal_seq = goals.iter().map(|goal| goal.id).max().unwrap_or(0);
        Self {
            transactions,
            goals,
            budgets,
            debt,
            profile,
            transaction_seq,
            goal_seq,
        }
    }

    pub fn allocate_transaction_id(&mut self) -> u64 {
        self.transaction_seq += 1;
        self.transaction_seq
    }

    pub fn allocate_goal_id(&mut self) -> u64 {
        self.goal_seq += 1;
        self.goal_seq
    }

    /// Prepends a transaction (most-recent-first ordering) and returns its id.
    pub fn add_transaction(&mut self, transaction: Transaction) -> u64 {
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        id
    }

    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn remove_transaction(&mut self, id: u64) -> Option<Transaction> {
        remove_by_id(&mut self.transactions, id)
    }

    pub fn add_goal(&mut self, goal: Goal) -> u64 {
        let id = goal.id;
        self.goals.push(goal);
        id
    }

    pub fn goal(&self, id: u64) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn goal_mut(&mut self, id: u64) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|goal| goal.id == id)
    }

    pub fn remove_goal(&mut self, id: u64) -> Option<Goal> {
        remove_by_id(&mut self.goals, id)
    }

    /// Broadcasts a posted income amount to every goal's progress.
    pub fn apply_income_to_goals(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        for goal in &mut self.goals {
            goal.current += amount;
        }
    }

    pub fn budget_line(&self, category: Category) -> Option<&BudgetLine> {
        self.budgets.iter().find(|line| line.category == category)
    }

    /// Installs a budget line, replacing any existing line for the category.
    pub fn set_budget_line(&mut self, line: BudgetLine) {
        match self
            .budgets
            .iter_mut()
            .find(|existing| existing.category == line.category)
        {
            Some(existing) => *existing = line,
            None => self.budgets.push(line),
        }
    }

    pub fn remove_budget_line(&mut self, category: Category) -> bool {
        let before = self.budgets.len();
        self.budgets.retain(|line| line.category != category);
        self.budgets.len() != before
    }

    /// Net position across all accounts.
    pub fn balance(&self) -> f64 {
        self.transactions.iter().map(|txn| txn.amount).sum()
    }

    pub fn account_balance(&self, account: Account) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.account == account)
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn savings_balance(&self) -> f64 {
        self.account_balance(Account::Secondary)
    }

    pub fn income_total(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.is_income())
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn expense_total(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| !txn.is_income())
            .map(Transaction::magnitude)
            .sum()
    }

    /// Total spend recorded against `category` (expense magnitudes only).
    pub fn category_total(&self, category: Category) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.category == category && matches!(txn.kind, TransactionKind::Expense))
            .map(Transaction::magnitude)
            .sum()
    }

    pub fn totals(&self) -> LedgerTotals {
        LedgerTotals {
            balance: self.balance(),
            savings: self.savings_balance(),
            income: self.income_total(),
            expenses: self.expense_total(),
        }
    }

    /// Clears everything, returning the dashboard to its onboarding state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn remove_by_id<T: Identifiable>(items: &mut Vec<T>, id: u64) -> Option<T> {
    let index = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(index))
}
