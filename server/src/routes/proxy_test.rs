use axum::Router;
use axum::extract::{Path, RawQuery};
use axum::http::HeaderValue;
use axum::routing::get;

use super::*;
use crate::config::{ProxyTimeouts, ServerConfig};
use crate::routes::api_routes;

// =============================================================================
// Helpers
// =============================================================================

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(upstream: &str) -> AppState {
    AppState::new(&ServerConfig {
        port: 0,
        upstream: upstream.to_owned(),
        timeouts: ProxyTimeouts { request_secs: 5, connect_secs: 1 },
    })
    .unwrap()
}

/// Backend stand-in that echoes what it received.
fn fake_backend() -> Router {
    Router::new().route(
        "/staff/{id}",
        get(|Path(id): Path<String>, RawQuery(query): RawQuery, headers: HeaderMap| async move {
            let auth = headers.get("ratio-auth").and_then(|v| v.to_str().ok()).map(str::to_owned);
            let cookie = headers.get("cookie").is_some();
            Json(serde_json::json!({ "id": id, "query": query, "auth": auth, "cookie": cookie }))
        })
        .delete(|| async { (StatusCode::CONFLICT, Json(serde_json::json!({ "errors": ["in use"] }))) }),
    )
}

// =============================================================================
// Pure helpers
// =============================================================================

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(
        upstream_url("http://b/", "staff/4", Some("children=staff_type|shift_type")),
        "http://b/staff/4?children=staff_type|shift_type"
    );
    assert_eq!(upstream_url("http://b", "/mission", None), "http://b/mission");
    assert_eq!(upstream_url("http://b", "mission", Some("")), "http://b/mission");
}

#[test]
fn upstream_path_strips_api_prefix_and_keeps_encoding() {
    assert_eq!(upstream_path("/api/staff/4"), "/staff/4");
    assert_eq!(upstream_path("/api/staff/a%3Fx=1"), "/staff/a%3Fx=1");
    assert_eq!(upstream_path("/api/staff/a%2Fb%23c"), "/staff/a%2Fb%23c");
}

#[test]
fn forwarded_headers_keeps_only_allowlist() {
    let mut incoming = HeaderMap::new();
    incoming.insert("ratio-auth", HeaderValue::from_static("tok"));
    incoming.insert("accept", HeaderValue::from_static("application/json"));
    incoming.insert("cookie", HeaderValue::from_static("sid=1"));
    incoming.insert("host", HeaderValue::from_static("console.local"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get("ratio-auth").unwrap(), "tok");
    assert!(out.get("cookie").is_none());
    assert!(out.get("host").is_none());
}

#[tokio::test]
async fn proxy_error_renders_error_envelope() {
    let response = ProxyError::Upstream("refused".to_owned()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["errors"][0]["message"], "upstream unreachable: refused");
}

// =============================================================================
// End to end
// =============================================================================

#[tokio::test]
async fn get_is_forwarded_with_query_and_auth() {
    let backend = spawn(fake_backend()).await;
    let server = spawn(api_routes(state_for(&backend))).await;

    let response = reqwest::Client::new()
        .get(format!("{server}/api/staff/17?children=staff_type|shift_type"))
        .header("ratio-auth", "secret")
        .header("cookie", "sid=abc")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["id"], "17");
    assert_eq!(json["query"], "children=staff_type|shift_type");
    assert_eq!(json["auth"], "secret");
    assert_eq!(json["cookie"], false);
}

#[tokio::test]
async fn encoded_path_characters_stay_inside_the_segment() {
    let backend = spawn(fake_backend()).await;
    let server = spawn(api_routes(state_for(&backend))).await;

    let response = reqwest::get(format!("{server}/api/staff/a%3Fx=1%23frag")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["id"], "a?x=1#frag");
    assert_eq!(json["query"], serde_json::Value::Null);
}

#[tokio::test]
async fn upstream_status_and_body_pass_through() {
    let backend = spawn(fake_backend()).await;
    let server = spawn(api_routes(state_for(&backend))).await;

    let response = reqwest::Client::new().delete(format!("{server}/api/staff/17")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json, serde_json::json!({ "errors": ["in use"] }));
}

#[tokio::test]
async fn unreachable_upstream_yields_bad_gateway_envelope() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let server = spawn(api_routes(state_for(&dead))).await;

    let response = reqwest::get(format!("{server}/api/staff/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = response.json().await.unwrap();
    assert!(json["errors"][0]["message"].as_str().unwrap().starts_with("upstream unreachable"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let server = spawn(api_routes(state_for("http://127.0.0.1:9"))).await;
    let response = reqwest::get(format!("{server}/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
