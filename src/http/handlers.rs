//! Request handlers.
//!
//! # Responsibilities
//! - Static status and health endpoints (never contact the upstream)
//! - Turn a `/proxy/...` request into an `InboundRequest` and relay it

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::forward::{InboundRequest, RelayResponse};
use crate::http::request::request_id;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// `GET /`
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "ok",
        message: "CORS relay",
    })
}

/// `HEAD /` liveness probe.
pub async fn monitor() -> StatusCode {
    StatusCode::OK
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}

/// Relay handler for `/proxy/{path}`.
///
/// Forwarding runs on its own task so a caller hanging up doesn't cut a
/// retry sequence short.
pub async fn proxy_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(suffix) = state.route.capture(uri.path()) else {
        return (StatusCode::NOT_FOUND, "No matching route found").into_response();
    };

    tracing::debug!(
        request_id = %request_id(&headers),
        method = %method,
        suffix = %suffix,
        body_bytes = body.len(),
        "Relaying request"
    );

    let inbound = InboundRequest {
        method,
        suffix: suffix.to_string(),
        query: uri.query().map(String::from),
        headers,
        body,
    };

    let forwarder = state.forwarder.clone();
    let task = tokio::spawn(async move { forwarder.forward(inbound).await });

    match task.await {
        Ok(relay) => relay.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Forwarding task failed");
            RelayResponse::bad_gateway(format!("Proxy error: {}", e)).into_response()
        }
    }
}
