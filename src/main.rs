use anyhow::Result;
use esa_sizer::sizing::ReferenceTables;
use esa_sizer::{api, AppConfig, AppState, EventHub};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "esa_sizer=info,tower_http=info".into()),
        )
        .init();

    info!("ESA sizer v{} starting up", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        "Configuration loaded: port={}, scheme={}, domain_mode={}, lfs={}%, checksum={}%",
        config.port,
        config.scheme,
        config.domain_mode,
        config.lfs_overhead_pct,
        config.checksum_overhead_pct
    );

    let tables = ReferenceTables::standard();
    info!(
        "Reference tables: {} redundancy schemes, {} workload classes",
        tables.schemes.len(),
        tables.profiles.len()
    );

    let event_hub = EventHub::new(config.event_capacity);
    let bind_addr = format!("127.0.0.1:{}", config.port);
    let state = Arc::new(AppState::new(config, tables, event_hub));

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("ESA sizer shut down cleanly");
    Ok(())
}

/// Wait for SIGTERM or SIGINT for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
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
        () = ctrl_c => { warn!("Received Ctrl+C, shutting down..."); },
        () = terminate => { warn!("Received SIGTERM, shutting down..."); },
    }
}
