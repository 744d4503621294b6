use std::process::ExitCode;

use anyhow::Error;
use tokio::net::TcpListener;

use crate::{
    cli::LaunchProfile,
    lib::{
        errors::TransportError,
        telemetry::{self, RuntimeModeTelemetry},
    },
    server::{
        config::ServerConfig,
        descriptor::ServiceDescriptor,
        router::{build_router, AppState},
    },
};

/// Bundles a runtime error message with a process exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Bind the configured address and serve HTTP until a shutdown signal.
pub async fn run_server(profile: LaunchProfile, config: ServerConfig) -> Result<(), RuntimeExit> {
    telemetry::emit_runtime_mode(&RuntimeModeTelemetry {
        host: config.server.host.as_str(),
        port: config.server.port,
        config_path: config.source_path.to_string_lossy().as_ref(),
        launch_args: &profile.launch_args,
    });

    let descriptor = ServiceDescriptor::from_config(&config);
    let mcp_url = descriptor.streamable.clone();
    let router = build_router(AppState::new(descriptor));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.map_err(|source| {
        let error = TransportError::Bind {
            addr: addr.clone(),
            source,
        };
        tracing::error!(
            target: "agent_deck::runtime",
            bind_addr = %addr,
            reason = %error,
            "Failed to start HTTP listener"
        );
        RuntimeExit::from_error(Error::new(error))
    })?;

    tracing::info!(
        target: "agent_deck::runtime",
        bind_addr = %addr,
        mcp_url = %mcp_url,
        "HTTP listener ready"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| RuntimeExit::from_error(Error::new(TransportError::Serve { source })))?;

    tracing::info!(target: "agent_deck::runtime", "HTTP server shut down cleanly");
    Ok(())
}

/// Resolves once SIGINT (or SIGTERM on unix) is delivered.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {
                tracing::info!(
                    target: "agent_deck::runtime",
                    signal = "SIGINT",
                    "Shutdown signal received"
                );
            }
            _ = sigterm.recv() => {
                tracing::info!(
                    target: "agent_deck::runtime",
                    signal = "SIGTERM",
                    "Shutdown signal received"
                );
            }
        }
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}
