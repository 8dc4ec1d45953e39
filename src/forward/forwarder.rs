//! The forwarding procedure: one inbound request in, one relay response out.
//!
//! # State machine
//! ```text
//! Attempt(1) ──response──▶ Success (any status)
//!     │
//!     └─transport error─▶ n < max ? wait step*n, Attempt(n+1)
//!                                 : ExhaustedFailure (502)
//! ```

use std::time::{Duration, Instant};

use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use url::Url;

use crate::config::{RetryConfig, UpstreamConfig};
use crate::forward::error::ForwardError;
use crate::forward::headers::{outbound_request_headers, relay_response_headers};
use crate::forward::target::build_target_url;
use crate::observability::metrics;
use crate::resilience::backoff::linear_backoff;

/// Characters of the upstream body included in debug logs.
const BODY_PREVIEW_CHARS: usize = 200;

/// A caller's request, fully read.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    /// Path after the relay prefix, still percent-encoded.
    pub suffix: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// What an upstream attempt produced.
#[derive(Debug)]
struct UpstreamResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

/// The response handed back to the caller.
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RelayResponse {
    fn from_upstream(upstream: UpstreamResponse) -> Self {
        Self {
            status: upstream.status,
            headers: relay_response_headers(&upstream.headers),
            body: upstream.body,
        }
    }

    /// A 502 carrying `{"error": message}`.
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        let body = serde_json::json!({ "error": message.into() }).to_string();
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            status: StatusCode::BAD_GATEWAY,
            headers,
            body: Bytes::from(body),
        }
    }
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Forwards requests to a single fixed upstream with bounded retries.
#[derive(Debug, Clone)]
pub struct Forwarder {
    base_url: String,
    timeout: Duration,
    accept_invalid_certs: bool,
    default_user_agent: HeaderValue,
    max_attempts: u32,
    backoff_step: Duration,
}

impl Forwarder {
    /// Build a forwarder from configuration that passed `validate_config`.
    ///
    /// An unusable `default_user_agent` is rejected there; should an
    /// unvalidated one reach this point it is replaced with a warning.
    pub fn from_config(upstream: &UpstreamConfig, retries: &RetryConfig) -> Self {
        let default_user_agent = match HeaderValue::from_str(&upstream.default_user_agent) {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    default_user_agent = %upstream.default_user_agent.escape_debug(),
                    "Invalid default User-Agent, using Mozilla/5.0"
                );
                HeaderValue::from_static("Mozilla/5.0")
            }
        };

        Self {
            base_url: upstream.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(upstream.timeout_secs),
            accept_invalid_certs: upstream.accept_invalid_certs,
            default_user_agent,
            max_attempts: retries.max_attempts.max(1),
            backoff_step: Duration::from_millis(retries.backoff_step_ms),
        }
    }

    /// The upstream base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Forward `inbound` upstream and translate the outcome.
    ///
    /// Never fails: transport errors are retried and, once the attempt budget
    /// is spent, turned into a 502 response.
    pub async fn forward(&self, inbound: InboundRequest) -> RelayResponse {
        let start = Instant::now();

        let target = match build_target_url(&self.base_url, &inbound.suffix, inbound.query.as_deref()) {
            Ok(url) => url,
            Err(e) => {
                let err = ForwardError::from(e);
                tracing::warn!(suffix = %inbound.suffix, error = %err, "Cannot build upstream URL");
                metrics::record_relay(inbound.method.as_str(), StatusCode::BAD_GATEWAY.as_u16(), start);
                return RelayResponse::bad_gateway(format!("Proxy error: {}", err.detail()));
            }
        };
        let headers = outbound_request_headers(&inbound.headers, &self.default_user_agent);

        let mut last_error: Option<ForwardError> = None;

        for attempt in 1..=self.max_attempts {
            tracing::debug!(
                method = %inbound.method,
                target = %target,
                attempt,
                "Upstream attempt"
            );

            match self.attempt(&inbound.method, &target, &headers, &inbound.body).await {
                Ok(upstream) => {
                    metrics::record_attempt("response");
                    let marker = if upstream.status == StatusCode::OK { "✓" } else { "✗" };
                    tracing::info!(
                        method = %inbound.method,
                        suffix = %inbound.suffix,
                        status = upstream.status.as_u16(),
                        attempt,
                        "{} upstream replied",
                        marker
                    );
                    tracing::debug!(preview = %body_preview(&upstream.body), "Upstream body");

                    metrics::record_relay(inbound.method.as_str(), upstream.status.as_u16(), start);
                    return RelayResponse::from_upstream(upstream);
                }
                Err(err) => {
                    metrics::record_attempt(if err.is_timeout() { "timeout" } else { "transport_error" });
                    tracing::warn!(
                        suffix = %inbound.suffix,
                        error = %err.detail(),
                        "Retry {}/{}",
                        attempt,
                        self.max_attempts
                    );

                    last_error = Some(err);

                    if attempt < self.max_attempts {
                        metrics::record_retry();
                        tokio::time::sleep(linear_backoff(attempt, self.backoff_step)).await;
                    }
                }
            }
        }

        let detail = last_error.map(|e| e.detail()).unwrap_or_default();
        tracing::error!(
            suffix = %inbound.suffix,
            error = %detail,
            "Failed after {} retries",
            self.max_attempts
        );
        metrics::record_relay(inbound.method.as_str(), StatusCode::BAD_GATEWAY.as_u16(), start);

        RelayResponse::bad_gateway(format!(
            "Proxy error after {} retries: {}",
            self.max_attempts, detail
        ))
    }

    /// One self-contained attempt. The client lives only for this call.
    async fn attempt(
        &self,
        method: &Method,
        target: &Url,
        headers: &HeaderMap,
        body: &Bytes,
    ) -> Result<UpstreamResponse, ForwardError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .timeout(self.timeout)
            .build()
            .map_err(ForwardError::Client)?;

        let response = client
            .request(method.clone(), target.clone())
            .headers(headers.clone())
            .body(body.clone())
            .send()
            .await
            .map_err(ForwardError::Transport)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(ForwardError::Transport)?;

        Ok(UpstreamResponse { status, headers, body })
    }
}

/// Lossy UTF-8 preview of a body, truncated for logging.
fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.into_owned(),
    }
}
