//! Stand-ins for the backend API, served on an ephemeral local port.

use axum::{
    Json, Router,
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::endpoints;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind stub API listener");
    let address = listener
        .local_addr()
        .expect("Could not get stub API address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub API stopped unexpectedly");
    });

    format!("http://{address}")
}

/// Serve `body` as JSON from the transactions endpoint and return the base URL.
pub(crate) async fn spawn_stub_api(body: Value) -> String {
    let router = Router::new().route(
        endpoints::TRANSACTIONS_API,
        get(move || async move { Json(body) }),
    );

    serve(router).await
}

/// Serve `body` verbatim, labelled as JSON, from the transactions endpoint.
pub(crate) async fn spawn_stub_api_with_body(body: &'static str) -> String {
    let router = Router::new().route(
        endpoints::TRANSACTIONS_API,
        get(move || async move { ([(CONTENT_TYPE, "application/json")], body).into_response() }),
    );

    serve(router).await
}

/// Answer every request to the transactions endpoint with `status`.
pub(crate) async fn spawn_failing_api(status: StatusCode) -> String {
    let router = Router::new().route(
        endpoints::TRANSACTIONS_API,
        get(move || async move { status.into_response() }),
    );

    serve(router).await
}

/// A base URL nothing is listening on.
pub(crate) async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind listener");
    let address = listener
        .local_addr()
        .expect("Could not get listener address");
    drop(listener);

    format!("http://{address}")
}
