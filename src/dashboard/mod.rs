//! Dashboard module
//!
//! Provides the landing page: balance cards for income, outcome and the
//! total, followed by a table of every transaction from the backend.

mod cards;
mod controller;
mod handlers;
mod table;
mod view_model;

pub use controller::DashboardController;
pub use handlers::get_dashboard_page;
pub use view_model::{BalanceView, DashboardModel, TransactionView};
