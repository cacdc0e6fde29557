//! HTTP client for the backend API.

use std::time::Duration;

use reqwest::Client;

use crate::{Error, api::TransactionsResponse, endpoints};

/// How long to wait for the backend before giving up, unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A client for the backend API that stores transactions.
///
/// Cloning is cheap, clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API served at `base_url`, e.g. `http://localhost:3333`.
    ///
    /// Requests that take longer than `timeout` fail with [Error::ApiUnreachable].
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all transactions together with the current balance.
    ///
    /// # Errors
    /// Returns [Error::ApiUnreachable] if the request could not be completed,
    /// [Error::ApiStatus] for a non-success status code and
    /// [Error::InvalidPayload] if the body is not the expected JSON.
    pub async fn get_transactions(&self) -> Result<TransactionsResponse, Error> {
        let url = format!("{}{}", self.base_url, endpoints::TRANSACTIONS_API);
        tracing::debug!("Fetching transactions from {url}");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|error| {
            tracing::debug!("Could not parse body {:?}", String::from_utf8_lossy(&body));
            Error::InvalidPayload(error.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        Error,
        test_utils::{spawn_failing_api, spawn_stub_api, spawn_stub_api_with_body, unused_base_url},
    };

    use super::{ApiClient, DEFAULT_TIMEOUT};

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = ApiClient::new("http://localhost:3333/", DEFAULT_TIMEOUT).unwrap();

        assert_eq!(client.base_url(), "http://localhost:3333");
    }

    #[tokio::test]
    async fn fetches_transactions_and_balance() {
        let base_url = spawn_stub_api(json!({
            "transactions": [{
                "id": "1",
                "title": "Salário",
                "value": 500,
                "type": "income",
                "category": { "title": "Trabalho" },
                "created_at": "2020-05-01T00:00:00Z"
            }],
            "balance": { "income": 500, "outcome": 0, "total": 500 }
        }))
        .await;
        let client = ApiClient::new(&base_url, DEFAULT_TIMEOUT).unwrap();

        let response = client.get_transactions().await.unwrap();

        assert_eq!(response.transactions.len(), 1);
        assert_eq!(response.transactions[0].title, "Salário");
        assert_eq!(response.balance.total.as_f64(), 500.0);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let base_url = spawn_failing_api(StatusCode::INTERNAL_SERVER_ERROR).await;
        let client = ApiClient::new(&base_url, DEFAULT_TIMEOUT).unwrap();

        let result = client.get_transactions().await;

        assert_eq!(result, Err(Error::ApiStatus(500)));
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let base_url = spawn_stub_api_with_body("{\"transactions\": [}").await;
        let client = ApiClient::new(&base_url, DEFAULT_TIMEOUT).unwrap();

        let result = client.get_transactions().await;

        assert!(
            matches!(result, Err(Error::InvalidPayload(_))),
            "want invalid payload error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unreachable_backend_is_an_error() {
        let base_url = unused_base_url().await;
        let client = ApiClient::new(&base_url, Duration::from_secs(2)).unwrap();

        let result = client.get_transactions().await;

        assert!(
            matches!(result, Err(Error::ApiUnreachable(_))),
            "want unreachable error, got {result:?}"
        );
    }
}
