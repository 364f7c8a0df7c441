//! The aggregate dashboard state and its derived views.

pub mod state;

pub use state::{FinancialState, LedgerTotals};
