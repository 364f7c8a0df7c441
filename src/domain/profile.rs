use serde::{Deserialize, Serialize};

/// Onboarding data collected by the setup wizard. Drives the synthetic
/// seed transactions and remains editable through settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub initial_balance: f64,
    #[serde(default)]
    pub initial_savings: f64,
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub monthly_expenses: f64,
}
