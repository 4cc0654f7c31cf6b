//! End-to-end execution through the reqwest adapter against a local
//! upstream.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;

use apiconsole_application::ExecuteOperation;
use apiconsole_domain::{
    BearerToken, BoundRequest, HttpMethod, Operation, ParameterInput, StatusCategory,
    operation::Parameter,
};
use apiconsole_infrastructure::ReqwestHttpClient;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, RawQuery},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn get_checklist(Path(id): Path<String>) -> impl IntoResponse {
    if id == "missing" {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Checklist not found"})),
        )
    } else {
        (StatusCode::OK, Json(json!({"id": id})))
    }
}

async fn create_checklist(headers: HeaderMap, RawQuery(query): RawQuery, body: Bytes) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map_or(Value::Null, |v| Value::String(v.to_string()))
    };
    let received: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (
        StatusCode::CREATED,
        [("x-upstream", "echo")],
        Json(json!({
            "received": received,
            "query": query,
            "authorization": header("authorization"),
            "contentType": header("content-type"),
            "requestId": header("x-request-id"),
        })),
    )
}

async fn plain_text() -> &'static str {
    "service healthy"
}

async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/proxy/api/v2/check-lists/{id}", get(get_checklist))
        .route("/proxy/api/v2/check-lists", post(create_checklist))
        .route("/proxy/health", get(plain_text));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn executor(addr: SocketAddr) -> ExecuteOperation<ReqwestHttpClient> {
    let client = ReqwestHttpClient::new("apiconsole/test").unwrap();
    ExecuteOperation::new(Arc::new(client), format!("http://{addr}/proxy/"))
}

fn get_op() -> Operation {
    Operation::new("checklist-get", HttpMethod::Get, "/api/v2/check-lists/:id")
        .with_parameter(Parameter::path("id"))
}

fn create_op() -> Operation {
    Operation::new("checklist-create", HttpMethod::Post, "/api/v2/check-lists")
        .with_parameter(Parameter::query("board_id"))
        .with_parameter(Parameter::query("status"))
        .with_parameter(Parameter::header("X-Request-Id"))
}

#[tokio::test]
async fn test_get_returns_parsed_payload() {
    let addr = spawn_upstream().await;
    let op = get_op();
    let request = BoundRequest::bind(&op, &ParameterInput::new().path("id", "abc123"), "");

    let response = executor(addr).execute(&op, &request).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.status_text, "OK");
    assert_eq!(response.data, json!({"id": "abc123"}));
    assert_eq!(response.size, r#"{"id":"abc123"}"#.len());
    assert_eq!(response.header("Content-Type"), Some("application/json"));
    assert_eq!(response.category(), StatusCategory::Success);
}

#[tokio::test]
async fn test_upstream_404_is_client_error() {
    let addr = spawn_upstream().await;
    let op = get_op();
    let request = BoundRequest::bind(&op, &ParameterInput::new().path("id", "missing"), "");

    let response = executor(addr).execute(&op, &request).await;

    assert_eq!(response.status, 404);
    assert_eq!(response.status_text, "Not Found");
    assert_eq!(response.category(), StatusCategory::ClientError);
    assert_eq!(response.data["message"], "Checklist not found");
}

#[tokio::test]
async fn test_post_sends_body_headers_and_query() {
    let addr = spawn_upstream().await;
    let op = create_op();
    let input = ParameterInput::new()
        .query("board_id", "")
        .query("status", "ACTIVE")
        .header("X-Request-Id", "req-42");
    let request = BoundRequest::bind(&op, &input, "{\n  \"name\": \"Launch\",\n  \"position\": 0\n}")
        .with_auth_token(BearerToken::new(" secret "));

    let response = executor(addr).execute(&op, &request).await;

    assert_eq!(response.status, 201);
    assert_eq!(response.header("x-upstream"), Some("echo"));
    assert_eq!(
        response.data,
        json!({
            "received": {"name": "Launch", "position": 0},
            "query": "status=ACTIVE",
            "authorization": "Bearer secret",
            "contentType": "application/json",
            "requestId": "req-42",
        })
    );
}

#[tokio::test]
async fn test_non_json_body_becomes_string() {
    let addr = spawn_upstream().await;
    let op = Operation::new("health", HttpMethod::Get, "/health");

    let response = executor(addr)
        .execute(&op, &BoundRequest::bind(&op, &ParameterInput::new(), ""))
        .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.data, Value::String("service healthy".into()));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let op = get_op();
    let request = BoundRequest::bind(&op, &ParameterInput::new().path("id", "abc"), "");
    let response = executor(addr).execute(&op, &request).await;

    assert_eq!(response.status, 0);
    assert_eq!(response.status_text, "Network Error");
    assert!(response.error_message().is_some());
    assert!(response.headers.is_empty());
    assert_eq!(response.time, 0);
    assert_eq!(response.size, 0);
}
