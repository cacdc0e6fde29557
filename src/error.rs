//! Defines the app level error type and its conversion to rendered error pages.
use axum::response::{IntoResponse, Response};

use crate::error_page::ErrorPage;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The backend API could not be reached, or the connection failed before
    /// a complete response was received.
    ///
    /// The string holds the underlying transport error for the server logs.
    #[error("could not reach the backend API: {0}")]
    ApiUnreachable(String),

    /// The backend API answered with a status code outside of 2xx.
    #[error("the backend API responded with status {0}")]
    ApiStatus(u16),

    /// The backend API response body was not the expected JSON payload.
    #[error("the backend API sent a malformed payload: {0}")]
    InvalidPayload(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if let Some(status) = value.status() {
            Error::ApiStatus(status.as_u16())
        } else if value.is_decode() {
            Error::InvalidPayload(value.to_string())
        } else {
            Error::ApiUnreachable(value.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("An unexpected error occurred: {}", self);

        match self {
            Error::InvalidTimezone(timezone) => ErrorPage::internal_server_error(
                "Configuração de fuso horário inválida",
                &format!(
                    "Não foi possível obter o fuso horário \"{timezone}\". Verifique as \
                    configurações do servidor e use um nome de fuso horário canônico, \
                    como \"America/Sao_Paulo\"."
                ),
            )
            .into_response(),
            Error::ApiUnreachable(_) | Error::ApiStatus(_) | Error::InvalidPayload(_) => {
                ErrorPage::bad_gateway().into_response()
            }
        }
    }
}
