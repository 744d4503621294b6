//! LaunchProfile and host/port/config resolution.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

const DEFAULT_CONFIG: &str = "config.toml";
const MCP_CONFIG_ENV: &str = "MCP_CONFIG_PATH";
const MCP_HOST_ENV: &str = "MCP_HOST";
const MCP_PORT_ENV: &str = "MCP_PORT";

/// Source of the resolved config path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

impl ConfigSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Cli => "cli",
            ConfigSource::Env => "env",
            ConfigSource::Default => "default",
        }
    }

    /// Whether the path was chosen explicitly rather than falling back to
    /// `config.toml` in the working directory.
    pub const fn is_explicit(&self) -> bool {
        !matches!(self, ConfigSource::Default)
    }
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config_path: PathBuf,
    pub config_source: ConfigSource,
    pub host_override: Option<String>,
    pub port_override: Option<u16>,
    pub launch_args: Vec<String>,
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<(PathBuf, ConfigSource)> {
    let (path, source) = match override_path {
        Some(path) => (path, ConfigSource::Cli),
        None => match env_value(MCP_CONFIG_ENV) {
            Some(value) => (PathBuf::from(value), ConfigSource::Env),
            None => (PathBuf::from(DEFAULT_CONFIG), ConfigSource::Default),
        },
    };

    if path.is_absolute() {
        return Ok((path, source));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok((cwd.join(path), source))
}

/// Resolve host in the order: CLI override → env var.
pub fn resolve_host_override(host_override: Option<String>) -> Option<String> {
    host_override
        .and_then(|v| normalize_value(&v))
        .or_else(|| env_value(MCP_HOST_ENV))
}

/// Resolve port in the order: CLI override → env var. A set but
/// unparseable `MCP_PORT` aborts startup instead of being ignored.
pub fn resolve_port_override(port_override: Option<u16>) -> Result<Option<u16>> {
    if let Some(port) = port_override {
        return Ok(Some(port));
    }

    env_value(MCP_PORT_ENV).map(|raw| parse_port(&raw)).transpose()
}

/// Build launch arguments suitable for reproduction/logging.
pub fn build_launch_args(config: &Path, host: Option<&str>, port: Option<u16>) -> Vec<String> {
    let mut args = vec![format!("--config={}", config.display())];
    if let Some(host) = host {
        args.push(format!("--host={host}"));
    }
    if let Some(port) = port {
        args.push(format!("--port={port}"));
    }
    args
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.parse::<u16>()
        .map_err(|_| anyhow!("{MCP_PORT_ENV} must be a TCP port number, got `{raw}`"))
}

fn normalize_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// Read an environment variable, treating blank values as unset.
fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|v| normalize_value(&v))
}
