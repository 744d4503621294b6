//! Service identity payloads for the plain HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::protocol::{SERVICE_NAME, SERVICE_VERSION};
use crate::server::config::ServerConfig;

/// Liveness payload served by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    /// The fixed payload: the process is alive, nothing deeper is probed.
    pub fn current() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// Discovery payload served by `GET /mcp`: service identity plus the
/// endpoint URLs clients should use, derived from the resolved
/// configuration rather than from the incoming request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub service: String,
    pub version: String,
    pub streamable: String,
    pub health: String,
}

impl ServiceDescriptor {
    /// Build the descriptor once at startup from the explicit configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        let base = format!("http://{}:{}", config.server.host, config.server.port);
        Self {
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            streamable: format!("{base}/mcp"),
            health: format!("{base}/health"),
        }
    }
}
