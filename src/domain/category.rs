//! The closed set of spending categories understood by the dashboard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FinanceError;

/// Fixed expense classification consumed by the ledger and budget tracker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Rent,
    Shopping,
    Health,
    Education,
    Savings,
    Other,
}

impl Category {
    /// Every category, in presentation order.
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Rent,
        Category::Shopping,
        Category::Health,
        Category::Education,
        Category::Savings,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Rent => "Rent",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Savings => "Savings",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = FinanceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .find(|category| category.label().to_ascii_lowercase() == normalized)
            .copied()
            .ok_or_else(|| FinanceError::Validation(format!("unknown category `{}`", raw.trim())))
    }
}
