//! The dashboard's state and the single load that fills it.

use time_tz::Tz;

use crate::{
    Error,
    api::ApiClient,
    dashboard::view_model::{BalanceView, DashboardModel, TransactionView},
};

/// Owns the data shown on the dashboard.
///
/// Starts out empty: no transactions and no balance. Only [DashboardController::load]
/// writes to the state, and a successful load replaces both parts at once.
#[derive(Debug, Default)]
pub struct DashboardController {
    transactions: Vec<TransactionView>,
    balance: Option<BalanceView>,
}

impl DashboardController {
    /// A controller with nothing loaded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the transactions and balance from the backend and store them for display.
    ///
    /// Dates are shown in `timezone`. On failure the state is left untouched.
    ///
    /// # Errors
    /// Returns the backend error if the request fails or the payload is malformed.
    pub async fn load(&mut self, client: &ApiClient, timezone: &Tz) -> Result<(), Error> {
        let response = client.get_transactions().await?;
        let model = DashboardModel::from_response(response, timezone);

        tracing::debug!(
            "Loaded {} transactions for the dashboard",
            model.transactions.len()
        );

        self.transactions = model.transactions;
        self.balance = Some(model.balance);

        Ok(())
    }

    /// The loaded transactions, empty until a load has succeeded.
    pub fn transactions(&self) -> &[TransactionView] {
        &self.transactions
    }

    /// `None` until a load has succeeded.
    pub fn balance(&self) -> Option<&BalanceView> {
        self.balance.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use time_tz::timezones;

    use crate::{
        Error,
        api::{ApiClient, DEFAULT_TIMEOUT},
        currency::format_value,
        test_utils::{spawn_failing_api, spawn_stub_api},
    };

    use super::DashboardController;

    fn utc() -> &'static time_tz::Tz {
        timezones::get_by_name("Etc/UTC").unwrap()
    }

    #[test]
    fn starts_empty() {
        let controller = DashboardController::new();

        assert!(controller.transactions().is_empty());
        assert_eq!(controller.balance(), None);
    }

    #[tokio::test]
    async fn load_stores_transactions_and_balance() {
        let base_url = spawn_stub_api(json!({
            "transactions": [
                {
                    "id": "1",
                    "title": "Salário",
                    "value": 500,
                    "type": "income",
                    "category": { "title": "Trabalho" },
                    "created_at": "2020-05-01T00:00:00Z"
                },
                {
                    "id": "2",
                    "title": "Mercado",
                    "value": 200,
                    "type": "outcome",
                    "category": { "title": "Alimentação" },
                    "created_at": "2020-05-02T00:00:00Z"
                }
            ],
            "balance": { "income": 500, "outcome": 200, "total": 300 }
        }))
        .await;
        let client = ApiClient::new(&base_url, DEFAULT_TIMEOUT).unwrap();
        let mut controller = DashboardController::new();

        controller.load(&client, utc()).await.unwrap();

        assert_eq!(controller.transactions().len(), 2);
        assert_eq!(controller.transactions()[1].formatted_value, format!("- {}", format_value(200.0)));
        let balance = controller.balance().expect("balance should be set after a load");
        assert_eq!(balance.total, format_value(300.0));
    }

    #[tokio::test]
    async fn failed_load_leaves_state_empty() {
        let base_url = spawn_failing_api(StatusCode::SERVICE_UNAVAILABLE).await;
        let client = ApiClient::new(&base_url, DEFAULT_TIMEOUT).unwrap();
        let mut controller = DashboardController::new();

        let result = controller.load(&client, utc()).await;

        assert_eq!(result, Err(Error::ApiStatus(503)));
        assert!(controller.transactions().is_empty());
        assert_eq!(controller.balance(), None);
    }
}
