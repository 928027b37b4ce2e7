use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Uri};
use axum::routing::{any, get};

use super::*;
use crate::config::HostConfig;

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://backend/v1", "tasks", Some("status=pending")), "http://backend/v1/tasks?status=pending");
}

#[test]
fn upstream_url_skips_empty_query() {
    assert_eq!(upstream_url("http://backend/", "/clients/c-1", Some("")), "http://backend/clients/c-1");
    assert_eq!(upstream_url("http://backend", "clients", None), "http://backend/clients");
}

#[test]
fn filter_headers_keeps_only_allow_list() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

    let out = filter_headers(&headers, &FORWARDED_REQUEST_HEADERS);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(out.get(header::CONNECTION).is_none());
    assert!(out.get(header::TRANSFER_ENCODING).is_none());
    assert!(out.get(header::HOST).is_none());
}

#[test]
fn response_filter_passes_content_type_only() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::SET_COOKIE, HeaderValue::from_static("a=b"));

    let out = filter_headers(&headers, &FORWARDED_RESPONSE_HEADERS);
    assert_eq!(out.len(), 1);
    assert!(out.contains_key(header::CONTENT_TYPE));
}

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::BadRequest("..".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ProxyError::BodyTooLarge { limit: 10 }.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::Unreachable("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::BadResponse("eof".into()).status(), StatusCode::BAD_GATEWAY);
}

// =============================================================
// backend_path
// =============================================================

#[test]
fn backend_path_keeps_percent_encoding() {
    assert_eq!(backend_path("/api/clients/a%2Fb").unwrap(), "clients/a%2Fb");
    assert_eq!(backend_path("/api/tasks/t-1/photos").unwrap(), "tasks/t-1/photos");
}

#[test]
fn backend_path_rejects_dot_segments() {
    for raw in ["/api/clients/../admin", "/api/x/%2e%2e/admin", "/api/x/.%2E/admin", "/api/./clients", "/api/a\\..\\b"] {
        assert!(matches!(backend_path(raw), Err(ProxyError::BadRequest(_))), "{raw}");
    }
}

#[test]
fn backend_path_allows_dots_inside_segments() {
    assert_eq!(backend_path("/api/media/photo.v2.jpg").unwrap(), "media/photo.v2.jpg");
    assert_eq!(backend_path("/api/x/..%2F..%2Fadmin").unwrap(), "x/..%2F..%2Fadmin");
}

#[test]
fn backend_path_requires_api_prefix() {
    assert!(backend_path("/pkg/verdant.js").is_err());
}

// =============================================================
// read_body
// =============================================================

#[tokio::test]
async fn read_body_stops_past_limit() {
    let err = read_body(Body::from(vec![0_u8; 64]), 16).await.unwrap_err();
    assert!(matches!(err, ProxyError::BodyTooLarge { limit: 16 }));
}

#[tokio::test]
async fn read_body_accepts_exact_limit() {
    let bytes = read_body(Body::from(vec![7_u8; 16]), 16).await.unwrap();
    assert_eq!(bytes.len(), 16);
}

#[tokio::test]
async fn broken_body_stream_is_bad_request() {
    let chunks: Vec<Result<Bytes, std::io::Error>> =
        vec![Ok(Bytes::from_static(b"partial")), Err(std::io::Error::other("connection reset"))];
    let err = read_body(Body::from_stream(futures::stream::iter(chunks)), 1024).await.unwrap_err();
    assert!(matches!(err, ProxyError::BadRequest(_)));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

// =============================================================
// forward, against a local backend
// =============================================================

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let seen = serde_json::json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "authorization": headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
        "cookie": headers.contains_key(header::COOKIE),
        "body": String::from_utf8_lossy(&body),
    });
    (
        StatusCode::CREATED,
        [(header::CACHE_CONTROL, "no-store"), (header::SET_COOKIE, "backend=1")],
        axum::Json(seen),
    )
        .into_response()
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(2)).await;
    "late"
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_backend() -> String {
    serve(Router::new().route("/v1/slow", get(slow)).fallback(echo)).await
}

fn proxy_state(backend_url: &str, timeout: Duration, max_upload_bytes: usize) -> AppState {
    AppState::new(HostConfig {
        port: 0,
        backend_url: backend_url.to_owned(),
        backend_timeout: timeout,
        backend_connect_timeout: Duration::from_secs(1),
        max_upload_bytes,
    })
    .unwrap()
}

async fn spawn_proxy(state: AppState) -> String {
    serve(Router::new().route("/api/{*path}", any(forward)).with_state(state)).await
}

#[tokio::test]
async fn forward_passes_method_path_query_and_body() {
    let backend = spawn_backend().await;
    let proxy = spawn_proxy(proxy_state(&format!("{backend}/v1"), Duration::from_secs(5), 1024)).await;

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/tasks/t-1/status?notify=yes&x=a%20b"))
        .header(header::AUTHORIZATION, "Bearer tok")
        .header(header::COOKIE, "sid=secret")
        .body(r#"{"status":"completed"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");
    assert!(resp.headers().get(header::SET_COOKIE).is_none());
    assert!(resp.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("application/json"));

    let seen: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(seen["method"], "POST");
    assert_eq!(seen["uri"], "/v1/tasks/t-1/status?notify=yes&x=a%20b");
    assert_eq!(seen["authorization"], "Bearer tok");
    assert_eq!(seen["cookie"], false);
    assert_eq!(seen["body"], r#"{"status":"completed"}"#);
}

#[tokio::test]
async fn forward_keeps_encoded_slashes_inside_backend_root() {
    let backend = spawn_backend().await;
    let proxy = spawn_proxy(proxy_state(&format!("{backend}/v1"), Duration::from_secs(5), 1024)).await;

    let seen: serde_json::Value = reqwest::get(format!("{proxy}/api/clients/..%2F..%2Fadmin%2Fsecrets"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(seen["uri"], "/v1/clients/..%2F..%2Fadmin%2Fsecrets");
}

#[tokio::test]
async fn forward_rejects_encoded_dot_segments() {
    let state = proxy_state("http://127.0.0.1:9/v1", Duration::from_secs(1), 1024);
    let result = forward(
        State(state),
        Method::GET,
        OriginalUri(Uri::from_static("/api/clients/%2e%2e/%2E%2E/admin")),
        HeaderMap::new(),
        Body::empty(),
    )
    .await;
    assert!(matches!(result, Err(ProxyError::BadRequest(_))));
}

#[tokio::test]
async fn forward_rejects_oversized_body() {
    let backend = spawn_backend().await;
    let proxy = spawn_proxy(proxy_state(&format!("{backend}/v1"), Duration::from_secs(5), 16)).await;

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/media"))
        .body(vec![0_u8; 64])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn forward_reports_unreachable_backend_as_bad_gateway() {
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = closed.local_addr().unwrap();
    drop(closed);
    let proxy = spawn_proxy(proxy_state(&format!("http://{addr}"), Duration::from_secs(5), 1024)).await;

    let resp = reqwest::get(format!("{proxy}/api/clients")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn forward_reports_slow_backend_as_gateway_timeout() {
    let backend = spawn_backend().await;
    let proxy = spawn_proxy(proxy_state(&format!("{backend}/v1"), Duration::from_millis(200), 1024)).await;

    let resp = reqwest::get(format!("{proxy}/api/slow")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
}
