//! Business logic helpers for per-category budget limits.

use tracing::debug;

use crate::core::services::ServiceResult;
use crate::core::utils::parse_amount;
use crate::domain::budget::{BudgetComparison, BudgetLine};
use crate::domain::category::Category;
use crate::ledger::FinancialState;

/// Maintains category limits and derives spend-versus-limit rows.
pub struct BudgetService;

impl BudgetService {
    /// Sets the spending limit for a category. An existing line for the
    /// same category is replaced silently (last write wins).
    pub fn set_limit(
        state: &mut FinancialState,
        category: &str,
        limit: &str,
    ) -> ServiceResult<BudgetLine> {
        let category: Category = category.parse()?;
        let limit = parse_amount(limit)?;
        let line = BudgetLine { category, limit };
        state.set_budget_line(line);
        debug!(%category, limit, "budget limit set");
        Ok(line)
    }

    /// Removes the limit for `category`. Untracked categories are a no-op.
    pub fn remove(state: &mut FinancialState, category: Category) -> bool {
        let removed = state.remove_budget_line(category);
        if !removed {
            debug!(%category, "remove ignored; category not tracked");
        }
        removed
    }

    /// Limit-versus-spent rows for every tracked category. Spend is
    /// recomputed from the ledger on each call.
    pub fn comparison(state: &FinancialState) -> Vec<BudgetComparison> {
        state
            .budgets
            .iter()
            .map(|line| BudgetComparison {
                category: line.category,
                limit: line.limit,
                spent: state.category_total(line.category),
            })
            .collect()
    }
}
