use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for ledger, health, and persistence failures.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Malformed data: {0}")]
    Deserialization(String),
}

pub type Result<T> = StdResult<T, FinanceError>;

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        FinanceError::Deserialization(err.to_string())
    }
}
