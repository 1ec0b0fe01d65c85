//! Development reverse proxy for `/api`
//!
//! Forwards everything under `/api` to a locally running backend origin the
//! way the frontend dev server does, so the whole dev setup is reachable
//! from one port. Local backends sit behind self-signed certificates, so
//! certificate verification is off.

use std::env;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde_json::json;

/// Default upper bound on forwarded request bodies. Dev traffic includes
/// file uploads, so the default is generous; `HR_DEV_PROXY_MAX_BODY` tunes it.
const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024 * 1024;

/// Headers that should NOT be forwarded (hop-by-hop headers).
const HOP_BY_HOP_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailers",
    "transfer-encoding",
    "upgrade",
    // Recomputed by the client for the upstream request
    "host",
    "content-length",
];

/// Check if a header should be forwarded.
fn should_forward_header(name: &str) -> bool {
    let lower = name.to_lowercase();
    !HOP_BY_HOP_HEADERS.contains(&lower.as_str())
}

/// Dev proxy configuration
#[derive(Debug, Clone)]
pub struct DevProxyConfig {
    /// Origin requests under `/api` are forwarded to, when set
    pub origin: Option<String>,
    /// Largest request body the proxy will buffer, in bytes
    pub max_body_bytes: usize,
}

impl DevProxyConfig {
    /// Create a new DevProxyConfig from environment variables
    pub fn from_env() -> Self {
        DevProxyConfig {
            origin: env::var("HR_DEV_PROXY_ORIGIN")
                .ok()
                .filter(|v| !v.is_empty()),
            max_body_bytes: env::var("HR_DEV_PROXY_MAX_BODY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        }
    }
}

/// Shared proxy state: the upstream origin and the client used to reach it
pub struct ProxyContext {
    client: reqwest::Client,
    origin: String,
    max_body_bytes: usize,
}

impl ProxyContext {
    /// Build a proxy context for the given origin.
    pub fn new(origin: String, max_body_bytes: usize) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(ProxyContext {
            client,
            origin: origin.trim_end_matches('/').to_string(),
            max_body_bytes,
        })
    }

    /// Origin requests are forwarded to
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

/// Router forwarding everything under `/api` to the configured origin
pub fn router(context: Arc<ProxyContext>) -> Router {
    // The wildcard needs at least one character after the slash, so the bare
    // prefix and the trailing-slash form each get their own route.
    Router::new()
        .route("/api", any(forward))
        .route("/api/", any(forward))
        .route("/api/*path", any(forward))
        .with_state(context)
}

/// Forward one request to the upstream origin.
async fn forward(State(context): State<Arc<ProxyContext>>, req: Request) -> Response {
    let method = req.method().clone();
    let headers = req.headers().clone();
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let body = match axum::body::to_bytes(req.into_body(), context.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": format!("Failed to read request body: {}", e)})),
            )
                .into_response();
        }
    };

    let url = target_url(context.origin(), &path_and_query);
    tracing::debug!("Dev proxy forwarding {} {}", method, url);

    let mut builder = context.client.request(method, &url);

    // Forward allowed headers
    for (name, value) in headers.iter() {
        if should_forward_header(name.as_str()) {
            if let Ok(value_str) = value.to_str() {
                builder = builder.header(name.as_str(), value_str);
            }
        }
    }

    let upstream = match builder.body(body).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Dev proxy failed to reach {}: {}", context.origin(), e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": format!("Upstream unreachable: {}", e)})),
            )
                .into_response();
        }
    };

    // Relay status, content type, and body unchanged.
    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get("content-type")
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    match upstream.bytes().await {
        Ok(body_bytes) => Response::builder()
            .status(status)
            .header("content-type", content_type)
            .body(Body::from(body_bytes))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(e) => {
            tracing::error!("Dev proxy failed to read upstream response: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": format!("Upstream response unreadable: {}", e)})),
            )
                .into_response()
        }
    }
}

fn target_url(origin: &str, path_and_query: &str) -> String {
    format!("{}{}", origin, path_and_query)
}
