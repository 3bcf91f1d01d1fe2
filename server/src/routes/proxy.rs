//! `/api/*` reverse proxy to the personnel backend.
//!
//! The browser talks only to this server; requests under `/api` are replayed
//! against `RATIO_API_UPSTREAM` with an allowlist of headers. Upstream status
//! and body pass through untouched. Transport failures become a 502 carrying
//! the backend's own error envelope shape so the client handles them the
//! same way as backend errors.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Prefix stripped from incoming paths before forwarding.
pub const API_PREFIX: &str = "/api";

/// Request headers copied to the upstream request.
pub const FORWARDED_HEADERS: [&str; 3] = ["content-type", "accept", "ratio-auth"];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream unreachable: {0}")]
    Upstream(String),
    #[error("upstream response unreadable: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "errors": [{ "message": self.to_string() }] });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Join the upstream base, the captured path, and the raw query string.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}/{path}?{query}"),
        None => format!("{base}/{path}"),
    }
}

/// Upstream path for an incoming request path, still percent-encoded.
///
/// Works on the raw URI path so encoded `?`, `#` and `/` inside a segment
/// reach the backend unchanged.
#[must_use]
pub fn upstream_path(request_path: &str) -> &str {
    request_path.strip_prefix(API_PREFIX).unwrap_or(request_path)
}

/// Copy only the allowlisted headers.
#[must_use]
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_HEADERS {
        for value in incoming.get_all(name) {
            out.append(name, value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, upstream_path(uri.path()), query.as_deref());
    tracing::debug!(%method, %url, "proxying api request");

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "upstream body read failed");
        ProxyError::Body(e.to_string())
    })?;

    if status.is_server_error() {
        tracing::warn!(%method, %url, %status, "upstream returned server error");
    }

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(header::CONTENT_TYPE);
        }
    }
    Ok(response)
}
