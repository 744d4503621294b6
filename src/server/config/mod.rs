//! Load and validate server configuration.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::cli::LaunchProfile;
use crate::lib::errors::ConfigError;

pub mod server;
pub mod telemetry;

pub use server::{
    parse_server_section, RawServerSection, ServerOverrides, ServerSection, DEFAULT_HOST,
    DEFAULT_PORT,
};

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawServerConfig {
    server: Option<RawServerSection>,
}

impl ServerConfig {
    /// Resolve configuration for a launch profile: read the TOML file when
    /// present and apply the profile's host/port overrides on top.
    ///
    /// An explicitly selected file (CLI or environment) must exist; the
    /// implicit `config.toml` default may be absent.
    pub fn load(profile: &LaunchProfile) -> Result<Self, ConfigError> {
        telemetry::log_source(&profile.config_path, profile.config_source);
        let overrides = ServerOverrides {
            host: profile.host_override.clone(),
            port: profile.port_override,
        };
        Self::load_from_path(
            profile.config_path.clone(),
            profile.config_source.is_explicit(),
            overrides,
        )
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(
        path: PathBuf,
        file_expected: bool,
        overrides: ServerOverrides,
    ) -> Result<Self, ConfigError> {
        info!(
            target: "agent_deck::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let file_present = file_expected || path.is_file();
        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).required(file_expected));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "agent_deck::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawServerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "agent_deck::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone(), overrides).map_err(|err| {
            error!(
                target: "agent_deck::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config, file_present);
        Ok(config)
    }

    fn from_raw(
        raw: RawServerConfig,
        path: PathBuf,
        overrides: ServerOverrides,
    ) -> Result<Self, ConfigError> {
        let server = parse_server_section(raw.server, overrides, &path)?;
        Ok(Self {
            server,
            source_path: path,
        })
    }
}
