//! `/api` forwarding to the assistant backend.
//!
//! DESIGN
//! ======
//! Requests are relayed one-to-one: same method, same path under `/api`,
//! same query string, same body and `content-type`. The backend's status,
//! body and `content-type` come back unchanged, so the widget sees exactly
//! what the backend said, including error statuses.
//!
//! ERROR HANDLING
//! ==============
//! Only transport failures are answered locally: `502` with
//! `{"error": "<detail>"}`. A body over `PROXY_MAX_BODY_BYTES` is a `413`
//! and an unreadable body a `400`, both in the same shape and logged.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::config::HostConfig;
use crate::error::HostError;

/// Forwarding client bound to one backend origin.
#[derive(Debug)]
pub struct Proxy {
    http: reqwest::Client,
    backend_url: String,
    max_body_bytes: usize,
}

impl Proxy {
    pub fn new(config: &HostConfig) -> Result<Arc<Self>, HostError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| HostError::HttpClientBuild(e.to_string()))?;
        Ok(Arc::new(Self {
            http,
            backend_url: config.backend_url.clone(),
            max_body_bytes: config.max_body_bytes,
        }))
    }
}

/// Backend URL for a request to `path` (still percent-encoded, starting
/// with `/api/`).
pub fn target_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(query) if !query.is_empty() => format!("{backend_url}{path}?{query}"),
        _ => format!("{backend_url}{path}"),
    }
}

/// `ANY /api/{*path}`. The raw request path is forwarded so encoded
/// segments reach the backend byte for byte.
pub async fn forward(State(proxy): State<Arc<Proxy>>, req: Request) -> Response {
    let url = target_url(&proxy.backend_url, req.uri().path(), req.uri().query());
    let method = req.method().clone();
    let content_type = req.headers().get(header::CONTENT_TYPE).cloned();

    let limit = proxy.max_body_bytes;
    if declared_length(req.headers()).is_some_and(|length| length > limit) {
        tracing::warn!(%method, %url, limit, "request body over forwarding limit");
        return error_response(StatusCode::PAYLOAD_TOO_LARGE, &format!("request body exceeds {limit} bytes"));
    }

    let body = match to_bytes(req.into_body(), limit).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(%method, %url, limit, error = %e, "request body read failed");
            return error_response(StatusCode::BAD_REQUEST, &format!("unreadable request body: {e}"));
        }
    };

    let mut upstream = proxy.http.request(method.clone(), &url).body(body);
    if let Some(content_type) = content_type {
        upstream = upstream.header(header::CONTENT_TYPE, content_type);
    }

    let resp = match upstream.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "backend request failed");
            return error_response(StatusCode::BAD_GATEWAY, &e.to_string());
        }
    };

    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = match resp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "backend response body failed");
            return error_response(StatusCode::BAD_GATEWAY, &e.to_string());
        }
    };

    tracing::debug!(%method, %url, status = status.as_u16(), "forwarded");
    relay(status, content_type, bytes.into())
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

fn relay(status: StatusCode, content_type: Option<HeaderValue>, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    response
}

fn error_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(serde_json::json!({ "error": detail }))).into_response()
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
