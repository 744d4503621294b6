//! CLI argument definitions and `LaunchProfile` construction.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{
    build_launch_args, resolve_config_path, resolve_host_override, resolve_port_override,
    LaunchProfile,
};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Agent Deck MCP endpoint (HTTP health + JSON-RPC handshake)",
    long_about = None
)]
pub struct LaunchArgs {
    /// Host to bind and advertise (overrides MCP_HOST).
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind and advertise (overrides MCP_PORT).
    #[arg(long)]
    pub port: Option<u16>,
    /// Path to config.toml (overrides MCP_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let (config_path, config_source) = resolve_config_path(self.config_override)?;
        let host_override = resolve_host_override(self.host);
        let port_override = resolve_port_override(self.port)?;

        let launch_args = build_launch_args(&config_path, host_override.as_deref(), port_override);

        Ok(LaunchProfile {
            config_path,
            config_source,
            host_override,
            port_override,
            launch_args,
        })
    }
}
