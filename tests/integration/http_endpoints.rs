use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use agent_deck_mcp_server::server::{
    config::{ServerConfig, ServerOverrides},
    descriptor::ServiceDescriptor,
    router::{build_router, AppState},
};

use crate::common::{fixture, get_json, post_mcp, test_router};

#[tokio::test]
async fn health_reports_the_fixed_liveness_payload() -> Result<()> {
    let (status, body) = get_json(test_router(), "/health").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "ok", "service": "agent-deck-mcp-server" })
    );
    Ok(())
}

#[tokio::test]
async fn health_is_unaffected_by_prior_mcp_traffic() -> Result<()> {
    let router = test_router();
    let body = json!({ "jsonrpc": "2.0", "method": "initialize", "id": 1 });
    post_mcp(router.clone(), &body.to_string()).await?;
    post_mcp(router.clone(), "not json at all").await?;

    let (status, health) = get_json(router, "/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        health,
        json!({ "status": "ok", "service": "agent-deck-mcp-server" })
    );
    Ok(())
}

#[tokio::test]
async fn descriptor_advertises_the_configured_urls() -> Result<()> {
    let (status, body) = get_json(test_router(), "/mcp").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "service": "agent-deck-mcp-server",
            "version": "1.0.0",
            "streamable": "http://localhost:3002/mcp",
            "health": "http://localhost:3002/health"
        })
    );
    Ok(())
}

#[tokio::test]
async fn descriptor_follows_the_loaded_config_file() -> Result<()> {
    let config = ServerConfig::load_from_path(
        fixture("tests/fixtures/config_valid.toml"),
        true,
        ServerOverrides::default(),
    )
    .context("fixture config should load")?;
    let router = build_router(AppState::new(ServiceDescriptor::from_config(&config)));

    let (status, body) = get_json(router, "/mcp").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.get("streamable").and_then(|v| v.as_str()),
        Some("http://127.0.0.1:8787/mcp")
    );
    assert_eq!(
        body.get("health").and_then(|v| v.as_str()),
        Some("http://127.0.0.1:8787/health")
    );
    Ok(())
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() -> Result<()> {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/mcp")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .context("failed to build preflight request")?;

    let response = test_router()
        .oneshot(request)
        .await
        .context("router did not produce a response")?;

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|value| value.to_str().ok());
    assert_eq!(allow_origin, Some("*"));
    Ok(())
}

#[tokio::test]
async fn cors_headers_are_present_on_simple_requests() -> Result<()> {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .context("failed to build GET request")?;

    let response = test_router()
        .oneshot(request)
        .await
        .context("router did not produce a response")?;

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|value| value.to_str().ok());
    assert_eq!(allow_origin, Some("*"));
    Ok(())
}

#[tokio::test]
async fn unknown_routes_fall_through_to_404() -> Result<()> {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/nope")
        .body(Body::empty())
        .context("failed to build GET request")?;

    let response = test_router()
        .oneshot(request)
        .await
        .context("router did not produce a response")?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}
