//! Axum router for the HTTP surface: `GET /health`, `GET /mcp`, and the
//! JSON-RPC endpoint `POST /mcp`.

use std::sync::Arc;

use axum::{extract::State, response::{IntoResponse, Response}, routing::get, Json, Router};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::protocol::{error_codes, RpcErrorResponse, RpcRequest};
use crate::server::descriptor::{HealthStatus, ServiceDescriptor};
use crate::server::dispatch;

/// Shared state threaded through the handlers.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; never mutated while serving.
    pub descriptor: Arc<ServiceDescriptor>,
}

impl AppState {
    pub fn new(descriptor: ServiceDescriptor) -> Self {
        Self {
            descriptor: Arc::new(descriptor),
        }
    }
}

/// Build the router with all routes and a permissive CORS layer.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/mcp", get(handle_descriptor).post(handle_mcp))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

async fn handle_health() -> impl IntoResponse {
    Json(HealthStatus::current())
}

async fn handle_descriptor(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.descriptor.as_ref().clone())
}

/// Decode the POST body and hand it to the dispatcher.
///
/// Only the transport itself rejects here: a body that is not JSON maps
/// to -32700 and a JSON value that is not a request object to -32600.
/// Everything that decodes is dispatched, so absent or unknown fields
/// reach the dispatcher's own branches. All outcomes are HTTP 200.
async fn handle_mcp(body: String) -> Response {
    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(err) => {
            debug!(
                target: "agent_deck::http",
                reason = %err,
                "Rejecting request body that is not JSON"
            );
            return Json(RpcErrorResponse::error(
                Some(Value::Null),
                error_codes::PARSE_ERROR,
                "Parse error",
            ))
            .into_response();
        }
    };

    let raw_id = value.get("id").cloned();
    let request: RpcRequest = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(err) => {
            debug!(
                target: "agent_deck::http",
                reason = %err,
                "Rejecting structurally invalid request object"
            );
            let id = Some(raw_id.unwrap_or(Value::Null));
            return Json(RpcErrorResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Invalid request: {err}"),
            ))
            .into_response();
        }
    };

    Json(dispatch::dispatch(&request)).into_response()
}
