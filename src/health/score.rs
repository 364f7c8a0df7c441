//! The 0-100 composite financial-health score.

use serde::{Deserialize, Serialize};

use crate::health::recommend::{recommendations, Recommendation};
use crate::ledger::FinancialState;

const SAVINGS_WEIGHT: f64 = 0.40;
const DEBT_WEIGHT: f64 = 0.30;
const EXPENSE_WEIGHT: f64 = 0.30;

/// Composite score from savings rate, debt-to-income, and expense ratio.
///
/// Zero income is indeterminate and scores 0 rather than dividing by zero.
pub fn score(income: f64, expenses: f64, savings: f64, debt: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }
    let savings_rate = savings / income;
    let debt_to_income = debt / income;
    let expense_ratio = expenses / income;
    let raw = savings_rate * SAVINGS_WEIGHT
        + (1.0 - debt_to_income) * DEBT_WEIGHT
        + (1.0 - expense_ratio) * EXPENSE_WEIGHT;
    (raw * 100.0).clamp(0.0, 100.0)
}

/// Intermediate ratios feeding the score and the advice rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HealthBreakdown {
    pub savings_rate_pct: f64,
    pub debt_to_income: f64,
    pub expense_ratio: f64,
    /// Months of expenses covered by savings; `None` when there are no
    /// expenses to measure against.
    pub emergency_fund_months: Option<f64>,
}

impl HealthBreakdown {
    pub fn new(income: f64, expenses: f64, savings: f64, debt: f64) -> Self {
        let ratio = |numerator: f64, denominator: f64| {
            if denominator > 0.0 {
                numerator / denominator
            } else {
                0.0
            }
        };
        Self {
            savings_rate_pct: ratio(savings, income) * 100.0,
            debt_to_income: ratio(debt, income),
            expense_ratio: ratio(expenses, income),
            emergency_fund_months: (expenses > 0.0).then(|| savings / expenses),
        }
    }
}

/// Score, ratios, and advice derived in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub score: f64,
    pub breakdown: HealthBreakdown,
    pub recommendations: Vec<Recommendation>,
}

impl HealthReport {
    pub fn new(income: f64, expenses: f64, savings: f64, debt: f64) -> Self {
        let breakdown = HealthBreakdown::new(income, expenses, savings, debt);
        Self {
            score: score(income, expenses, savings, debt),
            recommendations: recommendations(
                breakdown.savings_rate_pct,
                breakdown.emergency_fund_months,
                breakdown.expense_ratio,
            ),
            breakdown,
        }
    }

    /// Recomputes the report from current ledger totals. Savings feed in as
    /// the savings-account balance floored at zero.
    pub fn for_state(state: &FinancialState) -> Self {
        Self::new(
            state.income_total(),
            state.expense_total(),
            state.savings_balance().max(0.0),
            state.debt,
        )
    }
}
