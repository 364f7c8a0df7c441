//! Rule-based advice derived from the health ratios.

use serde::{Deserialize, Serialize};

const GOOD_SAVINGS_RATE_PCT: f64 = 20.0;
const MIN_EMERGENCY_FUND_MONTHS: f64 = 3.0;
const MAX_EXPENSE_RATIO: f64 = 0.7;

/// How urgently a recommendation should be surfaced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Positive,
    Info,
    Warning,
}

/// One piece of advice rendered on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub severity: Severity,
    pub message: String,
}

/// Produces the ordered advice list. Rules are independent and may stack;
/// the closing encouragement appears only when nothing else fired, so the
/// result always holds at least one entry.
pub fn recommendations(
    savings_rate_pct: f64,
    emergency_fund_months: Option<f64>,
    expense_ratio: f64,
) -> Vec<Recommendation> {
    let mut advice = Vec::new();

    if savings_rate_pct >= GOOD_SAVINGS_RATE_PCT {
        advice.push(Recommendation {
            title: "Great savings rate".into(),
            severity: Severity::Positive,
            message: format!(
                "You are saving {:.1}% of your income. Keep that habit going.",
                savings_rate_pct
            ),
        });
    } else {
        advice.push(Recommendation {
            title: "Increase your savings".into(),
            severity: Severity::Info,
            message: format!(
                "You are saving {:.1}% of your income. The 50/30/20 guideline suggests putting at least 20% aside.",
                savings_rate_pct
            ),
        });
    }

    if let Some(months) = emergency_fund_months {
        if months < MIN_EMERGENCY_FUND_MONTHS {
            advice.push(Recommendation {
                title: "Build an emergency fund".into(),
                severity: Severity::Warning,
                message: format!(
                    "Your savings cover {:.1} months of expenses; aim for at least 3.",
                    months
                ),
            });
        }
    }

    if expense_ratio > MAX_EXPENSE_RATIO {
        advice.push(Recommendation {
            title: "Expenses are running high".into(),
            severity: Severity::Warning,
            message: format!(
                "Spending takes up {:.0}% of your income. Bringing it under 70% frees room to save.",
                expense_ratio * 100.0
            ),
        });
    }

    if advice.is_empty() {
        advice.push(Recommendation {
            title: "Keep it up".into(),
            severity: Severity::Positive,
            message: "Your finances look balanced. Keep doing what you are doing.".into(),
        });
    }

    advice
}
