//! Wire-format types shared by the dispatcher and the HTTP transport.

pub mod jsonrpc;
pub mod mcp;

pub use jsonrpc::{
    error_codes, RpcError, RpcErrorResponse, RpcOutcome, RpcRequest, RpcResponse, JSONRPC_VERSION,
};
pub use mcp::{
    methods, EmptyCapability, InitializeResult, PromptDefinition, PromptsListResult,
    ResourceDefinition, ResourcesListResult, ServerCapabilities, ServerInfo, ToolDefinition,
    ToolsListResult, PROTOCOL_VERSION, SERVICE_NAME, SERVICE_VERSION,
};
