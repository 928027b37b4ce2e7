//! `/api/*` pass-through to the backend REST API.
//!
//! DESIGN
//! ======
//! Method, path, query and body go through unchanged. The path is taken
//! from the raw request URI, still percent-encoded, so `a%2Fb` stays one
//! segment. Dot segments (`..`, `%2e%2e`) are refused because the URL
//! parser would resolve them against `BACKEND_URL`'s base path.
//! Only an allow-list of end-to-end headers crosses in either direction, so
//! hop-by-hop headers (`connection`, `transfer-encoding`, ...) are never copied.
//!
//! ERROR HANDLING
//! ==============
//! Failures that happen here, not at the backend, map to client or gateway
//! statuses: a bad path or broken upload is 400, an oversized body 413, an
//! unreachable backend 502, a slow one 504. Backend error statuses are passed
//! through untouched.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use futures::StreamExt;

use crate::state::AppState;

/// Request headers forwarded to the backend.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

/// Response headers copied back to the browser.
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::CACHE_CONTROL];

const API_PREFIX: &str = "/api/";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend timed out")]
    Timeout,

    #[error("backend response unreadable: {0}")]
    BadResponse(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unreachable(_) | Self::BadResponse(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Unreachable(err.to_string())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Backend-relative path from the raw request path, left percent-encoded.
///
/// # Errors
///
/// `ProxyError::BadRequest` when the path is outside `/api/` or contains a
/// dot segment or backslash.
pub fn backend_path(raw_path: &str) -> Result<&str, ProxyError> {
    let path = raw_path
        .strip_prefix(API_PREFIX)
        .ok_or_else(|| ProxyError::BadRequest(format!("{raw_path} is not an API path")))?;
    if path.contains('\\') || path.split('/').any(is_dot_segment) {
        return Err(ProxyError::BadRequest(format!("{raw_path} escapes the API root")));
    }
    Ok(path)
}

fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// Collect the request body, stopping as soon as it passes `limit` bytes.
///
/// # Errors
///
/// `BodyTooLarge` past the limit, `BadRequest` if the body stream fails
/// (client disconnect, malformed chunking).
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, ProxyError> {
    let mut stream = body.into_data_stream();
    let mut collected = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ProxyError::BadRequest(format!("request body unreadable: {e}")))?;
        if collected.len() + chunk.len() > limit {
            return Err(ProxyError::BodyTooLarge { limit });
        }
        collected.extend_from_slice(&chunk);
    }
    Ok(Bytes::from(collected))
}

/// Backend URL for `path` (without the `/api` prefix) and an optional raw
/// query string.
#[must_use]
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", backend_url.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// Copy only the allow-listed headers from `source`.
#[must_use]
pub fn filter_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Any-method handler for `/api/{*path}`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, ProxyError> {
    let path = backend_path(uri.path()).inspect_err(|err| tracing::warn!(%method, %uri, %err, "rejected"))?;
    let payload = read_body(body, state.config.max_upload_bytes).await?;

    let url = upstream_url(&state.config.backend_url, path, uri.query());
    tracing::debug!(%method, %url, bytes = payload.len(), "forwarding");

    let resp = state
        .backend
        .request(method.clone(), &url)
        .headers(filter_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(payload)
        .send()
        .await
        .map_err(|e| {
            let err = ProxyError::from_reqwest(&e);
            tracing::warn!(%method, %url, error = %e, "backend request failed");
            err
        })?;

    let status = resp.status();
    let resp_headers = filter_headers(resp.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = resp.bytes().await.map_err(|e| ProxyError::BadResponse(e.to_string()))?;
    if status.is_server_error() {
        tracing::warn!(%method, %url, %status, "backend error");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = resp_headers;
    Ok(response)
}
