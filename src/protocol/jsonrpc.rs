//! JSON-RPC 2.0 wire types for the MCP HTTP transport.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Literal protocol version stamped on every outgoing response.
pub const JSONRPC_VERSION: &str = "2.0";

/// Incoming JSON-RPC request, decoded permissively.
///
/// Every field is optional: the dispatcher answers requests with a missing
/// or unrecognized `method` through its error branch instead of rejecting
/// them at decode time, `jsonrpc` is never validated, and `id` is kept as
/// an opaque [`Value`] so the response can echo it byte-for-byte. An
/// explicit `"id": null` stays distinct from an absent `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    /// Declared protocol version; ignored.
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// Opaque request correlator, echoed unmodified.
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: Option<Value>,
    /// Method name selecting the dispatch branch.
    #[serde(default)]
    pub method: Option<String>,
    /// Method parameters; ignored by every current branch.
    #[serde(default)]
    pub params: Option<Value>,
}

impl RpcRequest {
    /// Builds a request carrying the given method and id.
    pub fn new(method: impl Into<String>, id: Value) -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_string()),
            id: Some(id),
            method: Some(method.into()),
            params: None,
        }
    }
}

/// A present `id` always decodes to `Some`, so `"id": null` becomes
/// `Some(Value::Null)` and only an absent field is `None`.
fn opaque_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Success response: `{jsonrpc, id, result}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request id, echoed from the request; omitted when the request had none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Result payload.
    pub result: Value,
}

impl RpcResponse {
    /// Creates a success response echoing `id`.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
        }
    }
}

/// Error response: `{jsonrpc, id, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request id, echoed from the request; omitted when the request had none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Error details.
    pub error: RpcError,
}

impl RpcErrorResponse {
    /// Creates an error response echoing `id`.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: RpcError {
                code,
                message: message.into(),
            },
        }
    }
}

/// JSON-RPC error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    /// Error code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
}

/// Outcome of a dispatch: exactly one of the success or error shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcOutcome {
    /// Dispatch produced a result.
    Success(RpcResponse),
    /// Dispatch produced an error.
    Error(RpcErrorResponse),
}

impl RpcOutcome {
    /// The echoed request id, if any.
    pub fn id(&self) -> Option<&Value> {
        match self {
            RpcOutcome::Success(response) => response.id.as_ref(),
            RpcOutcome::Error(response) => response.id.as_ref(),
        }
    }
}

/// Standard JSON-RPC error codes.
pub mod error_codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}
