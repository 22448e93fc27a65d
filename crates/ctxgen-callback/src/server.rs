//! Echo server: every POST is answered 200 with the decoded body

use axum::{
    body::Bytes,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    pub status: String,
    pub message: String,
    pub data: Value,
}

impl Envelope {
    fn success(message: &str, data: Value) -> Self {
        Self {
            status: "success".into(),
            message: message.into(),
            data,
        }
    }
}

/// POST on any path is echoed; other methods get 405.
pub fn router() -> Router {
    Router::new()
        .fallback(handle)
        .layer(TraceLayer::new_for_http())
}

async fn handle(method: Method, uri: Uri, body: Bytes) -> Response {
    if method != Method::POST {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let envelope = match serde_json::from_slice::<Value>(&body) {
        Ok(json) => {
            info!(
                "Received POST {} with data:\n{}",
                uri,
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
            Envelope::success("Data received", json)
        }
        Err(_) => {
            let text = String::from_utf8_lossy(&body).into_owned();
            info!("Received non-JSON POST {} data:\n{}", uri, text);
            Envelope::success("Raw data received", Value::String(text))
        }
    };
    Json(envelope).into_response()
}

/// Serves the echo router on `addr` until Ctrl-C.
pub async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting callback server on {}", listener.local_addr()?);
    axum::serve(listener, router())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Callback server shutting down");
        })
        .await?;
    Ok(())
}
