//! The JSON payload returned by the backend's transaction listing.

use serde::{Deserialize, Deserializer};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::api::Amount;

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received.
    Income,
    /// Money spent.
    Outcome,
}

/// The category a transaction was filed under.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    /// The display name, e.g. "Alimentação".
    pub title: String,
}

/// A transaction as recorded by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// Unique among all transactions.
    pub id: String,
    /// What the money was for, e.g. "Aluguel".
    pub title: String,
    /// The unsigned amount, [Transaction::type_] says which way it went.
    pub value: Amount,
    /// Whether the transaction is an income or an outcome.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// Missing for transactions whose category was removed.
    #[serde(default)]
    pub category: Option<Category>,
    /// When the transaction was recorded.
    #[serde(deserialize_with = "deserialize_rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Aggregate totals across all transactions.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Balance {
    /// The sum of all incomes.
    pub income: Amount,
    /// The sum of all outcomes.
    pub outcome: Amount,
    /// Income minus outcome.
    pub total: Amount,
}

/// The body of `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionsResponse {
    /// Every transaction, in the order the backend lists them.
    pub transactions: Vec<Transaction>,
    /// The totals across `transactions`.
    pub balance: Balance,
}

fn deserialize_rfc3339<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;

    OffsetDateTime::parse(&text, &Rfc3339).map_err(serde::de::Error::custom)
}
