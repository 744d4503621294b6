use std::path::Path;

use tracing::{debug, info};

use crate::cli::ConfigSource;

use super::ServerConfig;

pub fn log_source(path: &Path, source: ConfigSource) {
    if source.is_explicit() {
        info!(
            target: "agent_deck::config",
            path = %path.display(),
            source = source.as_str(),
            "Loading configuration from explicit path"
        );
    } else {
        debug!(
            target: "agent_deck::config",
            path = %path.display(),
            source = source.as_str(),
            "MCP_CONFIG_PATH not set; using default config.toml"
        );
    }
}

pub fn log_loaded(config: &ServerConfig, file_present: bool) {
    info!(
        target: "agent_deck::config",
        path = %config.source_path.display(),
        file_present = file_present,
        host = %config.server.host,
        port = config.server.port,
        "Configuration resolved"
    );
}
