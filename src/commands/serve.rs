//! HTTP server command implementation.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};

use agentdex::bridge::InitialDataBridge;
use agentdex::catalog::CatalogStore;
use agentdex::config::Config;
use agentdex::server::{self, AppState};
use agentdex::source::{FileRecordSource, HttpRecordSource, RecordSource, SourceError};

pub async fn run(
    config_path: &str,
    host_override: Option<IpAddr>,
    port_override: Option<u16>,
    data_file_override: Option<&Path>,
) -> Result<()> {
    let mut config = Config::load(config_path).await?;

    // CLI overrides config
    if let Some(host) = host_override {
        config.server.host = host.to_string();
    }
    if let Some(port) = port_override {
        config.server.port = port;
    }
    if let Some(file) = data_file_override {
        config.catalog.data_file = file.to_path_buf();
    }

    let source = build_source(&config)?;

    // Load the initial collection, substituting an empty catalog on failure
    // so the first paint is degraded rather than broken.
    let records = match source.load_all().await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "Failed to load catalog, serving an empty collection");
            Vec::new()
        }
    };

    let store = CatalogStore::new();
    let bridge = InitialDataBridge::new();
    bridge.seed(&store, records).await;

    let state = AppState {
        store,
        source,
        api_token: config.server.api_token.clone(),
    };
    let app = server::build_app(state, config.server.request_timeout_seconds);

    let ip: IpAddr = config.server.host.parse().context("invalid server.host")?;
    let addr = SocketAddr::new(ip, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "Starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

fn build_source(config: &Config) -> Result<Arc<dyn RecordSource>, SourceError> {
    let source: Arc<dyn RecordSource> = match &config.catalog.remote_url {
        Some(url) => Arc::new(HttpRecordSource::with_timeout(
            url,
            Duration::from_secs(config.catalog.fetch_timeout_seconds),
        )?),
        None => Arc::new(FileRecordSource::new(&config.catalog.data_file)),
    };
    Ok(source)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
