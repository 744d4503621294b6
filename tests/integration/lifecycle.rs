use std::path::PathBuf;

use anyhow::Result;

use agent_deck_mcp_server::{
    cli::{ConfigSource, LaunchProfile},
    server::{
        config::{ServerConfig, ServerSection},
        runtime::run_server,
    },
};

#[tokio::test]
async fn run_server_reports_bind_failures() -> Result<()> {
    let occupied = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = occupied.local_addr()?.port();

    let profile = LaunchProfile {
        config_path: PathBuf::from("config.toml"),
        config_source: ConfigSource::Default,
        host_override: None,
        port_override: Some(port),
        launch_args: Vec::new(),
    };
    let config = ServerConfig {
        server: ServerSection {
            host: "127.0.0.1".to_string(),
            port,
        },
        source_path: PathBuf::from("config.toml"),
    };

    let exit = run_server(profile, config)
        .await
        .expect_err("binding an already occupied port must fail");
    assert!(
        exit.message().contains(&format!("127.0.0.1:{port}")),
        "message should name the address: {}",
        exit.message()
    );
    Ok(())
}
