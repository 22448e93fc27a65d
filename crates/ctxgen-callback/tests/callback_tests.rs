//! Tests for the callback echo server

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use ctxgen_callback::{router, Envelope};
use serde_json::json;
use tower::ServiceExt;

async fn post(path: &str, body: &'static str) -> (StatusCode, Option<String>, Envelope) {
    let response = router()
        .oneshot(Request::post(path).body(Body::from(body)).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn echoes_json_body() {
    let (status, content_type, envelope) = post("/", r#"{"hub.mode":"update_stream","n":1}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(envelope.status, "success");
    assert_eq!(envelope.message, "Data received");
    assert_eq!(envelope.data, json!({"hub.mode": "update_stream", "n": 1}));
}

#[tokio::test]
async fn echoes_raw_text_body() {
    let (status, _, envelope) = post("/hub", "hub.mode=update_stream").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.message, "Raw data received");
    assert_eq!(envelope.data, json!("hub.mode=update_stream"));
}

#[tokio::test]
async fn accepts_any_path() {
    let (status, _, envelope) = post("/deeply/nested/callback", "[1,2,3]").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.data, json!([1, 2, 3]));
}

#[tokio::test]
async fn non_post_is_rejected() {
    let response = router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn serves_over_tcp() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    let body = r#"{"ping":true}"#;
    let request = format!(
        "POST / HTTP/1.1\r\nHost: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        addr,
        body.len(),
        body
    );
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
    assert!(response.contains(r#""ping":true"#));
}
