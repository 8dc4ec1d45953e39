//! Header filtering in both directions.
//!
//! # Request direction
//! - `Content-Type`, `Accept` and `User-Agent` are always set, falling back
//!   to defaults when the caller sent none
//! - Everything else passes through unless it is on the deny-list
//!
//! # Response direction
//! - Framing headers are dropped since the body is buffered and re-sent

use axum::http::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use axum::http::{HeaderMap, HeaderValue};

/// Content type sent upstream when the caller gave none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Accept value sent upstream when the caller gave none.
pub const DEFAULT_ACCEPT: &str = "*/*";

/// Inbound headers never copied to the upstream request.
///
/// The last three are excluded because they are set explicitly.
const DENIED_REQUEST_HEADERS: &[&str] = &[
    "host",
    "origin",
    "referer",
    "content-length",
    "transfer-encoding",
    "connection",
    "accept-encoding",
    "accept-language",
    "content-type",
    "accept",
    "user-agent",
];

/// Client-hint families, matched by prefix.
const DENIED_REQUEST_PREFIXES: &[&str] = &["sec-fetch-", "sec-ch-ua"];

/// Upstream headers invalidated by buffering the body.
const STRIPPED_RESPONSE_HEADERS: &[&str] = &["content-encoding", "transfer-encoding", "content-length"];

/// Returns true if an inbound header must not reach the upstream.
pub fn is_denied_request_header(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    DENIED_REQUEST_HEADERS.contains(&name.as_str())
        || DENIED_REQUEST_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
}

/// Returns true if an upstream header must not reach the caller.
pub fn is_stripped_response_header(name: &str) -> bool {
    STRIPPED_RESPONSE_HEADERS
        .iter()
        .any(|stripped| name.eq_ignore_ascii_case(stripped))
}

/// Build the header set for an upstream attempt.
pub fn outbound_request_headers(inbound: &HeaderMap, default_user_agent: &HeaderValue) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(inbound.len() + 3);

    headers.insert(
        CONTENT_TYPE,
        inbound
            .get(CONTENT_TYPE)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE)),
    );
    headers.insert(
        ACCEPT,
        inbound
            .get(ACCEPT)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ACCEPT)),
    );
    headers.insert(
        USER_AGENT,
        inbound
            .get(USER_AGENT)
            .cloned()
            .unwrap_or_else(|| default_user_agent.clone()),
    );

    for (name, value) in inbound {
        if !is_denied_request_header(name.as_str()) {
            headers.append(name.clone(), value.clone());
        }
    }

    headers
}

/// Copy upstream response headers, minus the framing ones.
pub fn relay_response_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(upstream.len());
    for (name, value) in upstream {
        if !is_stripped_response_header(name.as_str()) {
            headers.append(name.clone(), value.clone());
        }
    }
    headers
}
