//! Business logic helpers for savings goals.

use chrono::NaiveDate;
use tracing::debug;

use crate::core::services::ServiceResult;
use crate::core::utils::parse_amount;
use crate::domain::goal::Goal;
use crate::errors::FinanceError;
use crate::ledger::FinancialState;

/// Provides validated CRUD helpers for savings goals.
pub struct GoalService;

impl GoalService {
    /// Creates a goal and returns a copy of the stored record.
    pub fn add(
        state: &mut FinancialState,
        name: &str,
        target: &str,
        current: &str,
        deadline: NaiveDate,
    ) -> ServiceResult<Goal> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FinanceError::Validation("goal name is required".into()));
        }
        let target = parse_amount(target)?;
        if target <= 0.0 {
            return Err(FinanceError::Validation(
                "goal target must be greater than zero".into(),
            ));
        }
        let current = parse_amount(current)?;
        let id = state.allocate_goal_id();
        let goal = Goal::new(id, name, target, current, deadline);
        state.add_goal(goal.clone());
        debug!(id, name, target, "goal created");
        Ok(goal)
    }

    /// Removes the goal identified by `id`. Unknown ids are a logged no-op.
    pub fn remove(state: &mut FinancialState, id: u64) -> bool {
        match state.remove_goal(id) {
            Some(goal) => {
                debug!(id, name = %goal.name, "goal removed");
                true
            }
            None => {
                debug!(id, "remove ignored; goal not found");
                false
            }
        }
    }

    /// Advances every goal by a posted income amount. The dashboard treats
    /// any income as progress toward all goals at once; amounts that are
    /// zero or negative are ignored.
    pub fn on_income_posted(state: &mut FinancialState, amount: f64) {
        state.apply_income_to_goals(amount);
    }

    /// Adds a contribution to one specific goal and returns its new
    /// `current` value. Unlike income broadcasting, this targets a single
    /// goal explicitly.
    pub fn contribute(state: &mut FinancialState, goal_id: u64, amount: &str) -> ServiceResult<f64> {
        let amount = parse_amount(amount)?;
        let goal = state
            .goal_mut(goal_id)
            .ok_or_else(|| FinanceError::NotFound(format!("goal {}", goal_id)))?;
        goal.current += amount;
        debug!(goal_id, amount, current = goal.current, "goal contribution");
        Ok(goal.current)
    }
}
