//! Mock stand-in for the remote time-series API.
//!
//! Answers every request with a JSON echo of what arrived on the wire
//! (method, path, raw query string, headers, body) after checking HTTP basic
//! credentials. Client tests use it to assert exactly what the endpoint sends.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What the server saw on the wire, returned as the response body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    /// Raw query string, empty when the request URI had none.
    pub query: String,
    /// Header names are lowercased by the HTTP layer.
    pub headers: HashMap<String, String>,
    pub body: String,
}

#[derive(Clone)]
struct AppState {
    authorization: String,
}

/// The `Authorization` value the server expects for `key`/`secret`.
pub fn basic_auth(key: &str, secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{key}:{secret}")))
}

pub fn app(key: &str, secret: &str) -> Router {
    let state = Arc::new(AppState {
        authorization: basic_auth(key, secret),
    });
    Router::new().fallback(echo).with_state(state)
}

pub async fn run(listener: TcpListener, key: &str, secret: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(key, secret)).await
}

async fn echo(State(state): State<Arc<AppState>>, req: Request) -> Response {
    let (parts, body) = req.into_parts();

    let presented = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if presented != Some(state.authorization.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"error": "unauthorized"})),
        )
            .into_response();
    }

    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    let echo = Echo {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().unwrap_or_default().to_string(),
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    };
    Json(echo).into_response()
}
