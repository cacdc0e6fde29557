//! The backend API that the dashboard reads from.
//!
//! The backend is an external service, this module only models the one
//! request the dashboard makes and the payload it returns.

mod amount;
mod client;
mod payload;

pub use amount::Amount;
pub use client::{ApiClient, DEFAULT_TIMEOUT};
pub use payload::{Balance, Category, Transaction, TransactionType, TransactionsResponse};
