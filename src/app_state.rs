//! Implements a struct that holds the state of the web server.

use crate::{Error, api::ApiClient, timezone::get_timezone};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the backend API that stores the transactions.
    pub api_client: ApiClient,

    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that reads from the backend behind `api_client`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "America/Sao_Paulo".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if `local_timezone` is not a known timezone.
    pub fn new(api_client: ApiClient, local_timezone: &str) -> Result<Self, Error> {
        get_timezone(local_timezone)?;

        Ok(Self {
            api_client,
            local_timezone: local_timezone.to_owned(),
        })
    }
}
