//! Onboarding, settings, and full-reset flows.

use chrono::NaiveDate;
use tracing::info;

use crate::core::services::ServiceResult;
use crate::core::utils::parse_amount;
use crate::domain::category::Category;
use crate::domain::profile::UserProfile;
use crate::domain::transaction::{Account, Transaction, TransactionKind};
use crate::errors::FinanceError;
use crate::ledger::FinancialState;

const SEED_CATEGORY: Category = Category::Other;

/// Handles the first-launch wizard, profile edits, and the full reset.
pub struct ProfileService;

impl ProfileService {
    /// Completes onboarding: stores the profile and synthesizes the seed
    /// transactions so the dashboard starts from the declared balances.
    /// Zero-valued entries produce no seed.
    pub fn onboard(
        state: &mut FinancialState,
        profile: UserProfile,
        start_date: NaiveDate,
    ) -> ServiceResult<()> {
        if state.profile.is_some() {
            return Err(FinanceError::Validation(
                "profile already exists; edit it through settings".into(),
            ));
        }
        validate_profile(&profile)?;

        let seeds = [
            (
                "Initial balance",
                profile.initial_balance,
                TransactionKind::Income,
                Account::Primary,
            ),
            (
                "Initial savings",
                profile.initial_savings,
                TransactionKind::Income,
                Account::Secondary,
            ),
            (
                "Monthly income",
                profile.monthly_income,
                TransactionKind::Income,
                Account::Primary,
            ),
            (
                "Monthly expenses",
                profile.monthly_expenses,
                TransactionKind::Expense,
                Account::Primary,
            ),
        ];
        for (description, magnitude, kind, account) in seeds {
            if magnitude <= 0.0 {
                continue;
            }
            let id = state.allocate_transaction_id();
            state.add_transaction(Transaction::new(
                id,
                start_date,
                description,
                magnitude,
                kind,
                SEED_CATEGORY,
                account,
            ));
        }
        info!(name = %profile.name, "onboarding complete");
        state.profile = Some(profile);
        Ok(())
    }

    /// Applies a settings edit. Seed transactions are not regenerated.
    pub fn update(state: &mut FinancialState, profile: UserProfile) -> ServiceResult<()> {
        validate_profile(&profile)?;
        state.profile = Some(profile);
        Ok(())
    }

    /// Sets the outstanding debt figure used by the health score.
    pub fn set_debt(state: &mut FinancialState, amount: &str) -> ServiceResult<f64> {
        let amount = parse_amount(amount)?;
        state.debt = amount;
        Ok(amount)
    }

    /// Clears everything and returns the dashboard to onboarding.
    pub fn reset(state: &mut FinancialState) {
        state.reset();
        info!("dashboard state reset");
    }
}

fn validate_profile(profile: &UserProfile) -> ServiceResult<()> {
    if profile.name.trim().is_empty() {
        return Err(FinanceError::Validation("profile name is required".into()));
    }
    let figures = [
        ("initial balance", profile.initial_balance),
        ("initial savings", profile.initial_savings),
        ("monthly income", profile.monthly_income),
        ("monthly expenses", profile.monthly_expenses),
    ];
    for (label, value) in figures {
        if !value.is_finite() || value < 0.0 {
            return Err(FinanceError::Validation(format!(
                "{} must be a non-negative number",
                label
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Alex".into(),
            initial_balance: 2500.0,
            initial_savings: 1000.0,
            monthly_income: 3000.0,
            monthly_expenses: 1800.0,
        }
    }

    #[test]
    fn onboarding_seeds_the_ledger() {
        let mut state = FinancialState::new();
        ProfileService::onboard(&mut state, sample_profile(), start_date()).unwrap();

        assert_eq!(state.transactions.len(), 4);
        assert_eq!(state.balance(), 2500.0 + 1000.0 + 3000.0 - 1800.0);
        assert_eq!(state.savings_balance(), 1000.0);
        assert_eq!(state.expense_total(), 1800.0);
        assert!(state.profile.is_some());
    }

    #[test]
    fn zero_figures_produce_no_seed() {
        let mut state = FinancialState::new();
        let profile = UserProfile {
            initial_savings: 0.0,
            ..sample_profile()
        };
        ProfileService::onboard(&mut state, profile, start_date()).unwrap();
        assert_eq!(state.transactions.len(), 3);
        assert_eq!(state.savings_balance(), 0.0);
    }

    #[test]
    fn second_onboarding_is_rejected() {
        let mut state = FinancialState::new();
        ProfileService::onboard(&mut state, sample_profile(), start_date()).unwrap();
        let err = ProfileService::onboard(&mut state, sample_profile(), start_date())
            .expect_err("second onboarding must fail");
        assert!(matches!(err, FinanceError::Validation(_)));
        assert_eq!(state.transactions.len(), 4);
    }

    #[test]
    fn update_rejects_negative_figures() {
        let mut state = FinancialState::new();
        ProfileService::onboard(&mut state, sample_profile(), start_date()).unwrap();
        let bad = UserProfile {
            monthly_income: -1.0,
            ..sample_profile()
        };
        assert!(ProfileService::update(&mut state, bad).is_err());
    }

    #[test]
    fn set_debt_validates_the_amount() {
        let mut state = FinancialState::new();
        assert_eq!(ProfileService::set_debt(&mut state, "750.50").unwrap(), 750.5);
        assert!(ProfileService::set_debt(&mut state, "-1").is_err());
        assert_eq!(state.debt, 750.5);
    }

    #[test]
    fn reset_returns_to_onboarding() {
        let mut state = FinancialState::new();
        ProfileService::onboard(&mut state, sample_profile(), start_date()).unwrap();
        ProfileService::reset(&mut state);
        assert!(state.profile.is_none());
        assert!(state.transactions.is_empty());
        assert!(ProfileService::onboard(&mut state, sample_profile(), start_date()).is_ok());
    }
}
