//! Input parsing and filesystem helpers shared by services and storage.

use std::fs;
use std::path::Path;

use crate::errors::{FinanceError, Result};

/// Parses a user-supplied currency amount: a non-negative number with at
/// most two decimal places. Anything else is a validation error.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FinanceError::Validation("amount is required".into()));
    }
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (trimmed, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    let well_formed =
        all_digits(whole) && fraction.map_or(true, |part| all_digits(part) && part.len() <= 2);
    if !well_formed {
        return Err(FinanceError::Validation(format!(
            "`{}` is not a valid amount (expected a non-negative number with up to two decimal places)",
            trimmed
        )));
    }
    trimmed
        .parse::<f64>()
        .map_err(|err| FinanceError::Validation(err.to_string()))
}

/// Creates `path` (and any missing parents).
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
