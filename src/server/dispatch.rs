//! Fixed-method JSON-RPC dispatch for the MCP handshake.
//!
//! The dispatch table is closed: the initialization announcement, the three
//! always-empty capability listings, and a method-not-found error for
//! everything else. Declaring capabilities in `initialize` gates nothing;
//! every branch is reachable in any order.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::protocol::{
    error_codes, methods, InitializeResult, PromptsListResult, ResourcesListResult,
    RpcErrorResponse, RpcOutcome, RpcRequest, RpcResponse, ServerCapabilities, ServerInfo,
    ToolsListResult, PROTOCOL_VERSION, SERVICE_NAME, SERVICE_VERSION,
};

/// Message paired with [`error_codes::METHOD_NOT_FOUND`] for every
/// unrecognized or missing method.
pub const METHOD_NOT_FOUND_MESSAGE: &str = "Method not found";

/// Maps a decoded request to exactly one response, purely as a function of
/// the method name.
///
/// Stateless and synchronous; the only side effect is the diagnostic line
/// naming the method, emitted for every call including the error branch.
/// The request `id` is echoed unmodified in all branches, and `params` is
/// ignored by all branches.
pub fn dispatch(request: &RpcRequest) -> RpcOutcome {
    let method = request.method.as_deref().unwrap_or_default();
    info!(
        target: "agent_deck::dispatch",
        method = method,
        "Dispatching MCP request"
    );

    let id = request.id.clone();
    match method {
        methods::INITIALIZE => respond(id, handshake_announcement()),
        methods::TOOLS_LIST => respond(id, ToolsListResult::default()),
        methods::RESOURCES_LIST => respond(id, ResourcesListResult::default()),
        methods::PROMPTS_LIST => respond(id, PromptsListResult::default()),
        _ => RpcOutcome::Error(RpcErrorResponse::error(
            id,
            error_codes::METHOD_NOT_FOUND,
            METHOD_NOT_FOUND_MESSAGE,
        )),
    }
}

/// The fixed handshake announcement: protocol revision, optionless
/// capabilities for all three families, and the service identity.
fn handshake_announcement() -> InitializeResult {
    InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities::default(),
        server_info: ServerInfo {
            name: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
        },
    }
}

fn respond(id: Option<Value>, result: impl Serialize) -> RpcOutcome {
    match serde_json::to_value(result) {
        Ok(value) => RpcOutcome::Success(RpcResponse::success(id, value)),
        Err(err) => RpcOutcome::Error(RpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            err.to_string(),
        )),
    }
}
