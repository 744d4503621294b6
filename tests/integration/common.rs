use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{Request, Response, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use agent_deck_mcp_server::server::{
    config::{ServerConfig, ServerSection},
    descriptor::ServiceDescriptor,
    router::{build_router, AppState},
};

/// Configuration matching the documented defaults, without touching disk.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        server: ServerSection {
            host: "localhost".to_string(),
            port: 3002,
        },
        source_path: PathBuf::from("config.toml"),
    }
}

pub fn test_router() -> Router {
    let state = AppState::new(ServiceDescriptor::from_config(&test_config()));
    build_router(state)
}

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

pub async fn get_json(router: Router, uri: &str) -> Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .context("failed to build GET request")?;
    let response = router
        .oneshot(request)
        .await
        .context("router did not produce a response")?;
    read_json(response).await
}

pub async fn post_mcp(router: Router, body: &str) -> Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .context("failed to build POST request")?;
    let response = router
        .oneshot(request)
        .await
        .context("router did not produce a response")?;
    read_json(response).await
}

async fn read_json(response: Response<Body>) -> Result<(StatusCode, Value)> {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .context("failed to read response body")?;
    let value = serde_json::from_slice(&bytes).context("response body is not JSON")?;
    Ok((status, value))
}
