//! Display-ready copies of the backend data.
//!
//! Everything here is a pure transformation of a [TransactionsResponse], so
//! it can be tested without a backend.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use time_tz::{OffsetDateTimeExt, Tz};

use crate::{
    api::{Balance, Transaction, TransactionType, TransactionsResponse},
    currency::format_value,
};

/// Day/month/year with slashes, the way dates are written in Brazil.
const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day padding:zero]/[month repr:numerical padding:zero]/[year]");

/// A transaction with its value and date formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionView {
    /// The transaction as received from the backend.
    pub transaction: Transaction,
    /// The formatted value, prefixed with `"- "` for outcomes.
    pub formatted_value: String,
    /// The creation date in the local timezone, e.g. `01/05/2020`.
    pub formatted_date: String,
}

impl TransactionView {
    /// Format `transaction` for display, showing its date in `timezone`.
    ///
    /// The date uses the offset `timezone` had when the transaction was
    /// created, so daylight saving time is taken into account.
    pub fn new(transaction: Transaction, timezone: &Tz) -> Self {
        let formatted_value = format_signed_value(&transaction);
        let formatted_date = format_date(transaction.created_at.to_timezone(timezone).date());

        Self {
            transaction,
            formatted_value,
            formatted_date,
        }
    }
}

/// The balance totals formatted as currency.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct BalanceView {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

impl From<Balance> for BalanceView {
    fn from(balance: Balance) -> Self {
        Self {
            income: format_value(balance.income.as_f64()),
            outcome: format_value(balance.outcome.as_f64()),
            total: format_value(balance.total.as_f64()),
        }
    }
}

/// Everything the dashboard displays, derived from one backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    /// In the order the backend sent them.
    pub transactions: Vec<TransactionView>,
    /// The formatted totals.
    pub balance: BalanceView,
}

impl DashboardModel {
    /// Derive the display model from a backend response.
    ///
    /// Dates are shown in `timezone`.
    pub fn from_response(response: TransactionsResponse, timezone: &Tz) -> Self {
        let transactions = response
            .transactions
            .into_iter()
            .map(|transaction| TransactionView::new(transaction, timezone))
            .collect();

        Self {
            transactions,
            balance: response.balance.into(),
        }
    }
}

fn format_signed_value(transaction: &Transaction) -> String {
    let value = format_value(transaction.value.as_f64());

    match transaction.type_ {
        TransactionType::Income => value,
        TransactionType::Outcome => format!("- {value}"),
    }
}

fn format_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
