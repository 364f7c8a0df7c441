use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Identifiable;

/// A named savings goal tracked on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: u64,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub deadline: NaiveDate,
}

impl Goal {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        target: f64,
        current: f64,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            target,
            current,
            deadline,
        }
    }

    /// Fraction of the target reached. Not clamped; an overshot goal reads
    /// as progress above 100%.
    pub fn progress_ratio(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        self.current / self.target
    }
}

impl Identifiable for Goal {
    fn id(&self) -> u64 {
        self.id
    }
}
