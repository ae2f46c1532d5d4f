//! Serve command - load artifacts once, then run the web server

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::infrastructure::{artifacts, logging};

/// Run the web server. Artifact load failures are tolerated; the server
/// starts regardless and refuses predictions until restarted with usable
/// artifacts.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init(&config.logging);

    let artifact_dir = config
        .artifacts
        .dir
        .clone()
        .unwrap_or_else(artifacts::default_dir);
    let state = AppState::new(artifacts::load(&artifact_dir));

    let app = crate::api::create_router(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
