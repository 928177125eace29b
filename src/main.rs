// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use channel_stocks::application::channel_service::ChannelService;
use channel_stocks::application::chat_service::ChatService;
use channel_stocks::application::polling_service::PollingService;
use channel_stocks::domain::series::SeriesBuffer;
use channel_stocks::infrastructure::config::load_app_config;
use channel_stocks::infrastructure::http_backend::HttpBackend;
use channel_stocks::presentation::app_state::AppState;
use channel_stocks::presentation::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("channel_stocks=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Backend adapter (infrastructure layer)
    let backend = Arc::new(HttpBackend::new(&app_config.backend)?);

    // Polling loop owns the chart buffer
    let buffer = SeriesBuffer::with_capacity(app_config.polling.capacity)
        .context("polling.capacity must be at least 1")?;
    let mut polling = PollingService::new(
        backend.clone(),
        buffer,
        app_config.polling.interval(),
        app_config.polling.color_step,
    );

    let state = Arc::new(AppState {
        chart: polling.subscribe(),
        channel_service: ChannelService::new(backend.clone()),
        chat_service: ChatService::new(backend),
    });

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poller = tokio::spawn(async move { polling.run(shutdown_rx).await });

    let addr: SocketAddr = app_config
        .server
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address {}", app_config.server.listen_addr))?;
    tracing::info!("Starting channel-stocks on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state))
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
            let _ = shutdown_tx.send(true);
        })
        .await?;

    poller.await?;
    Ok(())
}
