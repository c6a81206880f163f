//! Universal Account swap core - host executable
//!
//! Serves token prices, chain eligibility and aggregated portfolios over HTTP
//! and keeps the price cache warm in the background. Swaps are not served
//! here: embedders drive them through `ServiceContainer::spawn_session`.
use anyhow::Context;
use dotenv::dotenv;
use log::{error, info};
use ua_swap_core::{AppConfig, Router};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting UA swap core v{}", ua_swap_core::VERSION);

    let config = AppConfig::from_env();
    if config.oracle.moralis_api_key.is_none() {
        info!(
            "MORALIS_API_KEY is not set, {} will keep its catalog price",
            config.extra_token_id
        );
    }
    let listen_addr = config.listen_addr.clone();

    info!("Initializing application...");
    let (router, services, mut price_refresh_service) =
        ua_swap_core::create_application(config).context("Failed to initialize application")?;

    // Warm the cache before serving
    if let Err(e) = services.price_oracle().refresh_all(services.tokens()).await {
        error!("Initial price refresh failed: {:#}", e);
    }

    info!("Starting price refresh background service...");
    if let Err(e) = price_refresh_service.start().await {
        error!("Failed to start price refresh service: {}", e);
    } else {
        info!("Price refresh service started successfully");
    }

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;

    info!("Listening on {}. Press Ctrl+C to stop.", listen_addr);
    axum::serve(listener, router.setup_routes())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await
        .context("HTTP server failed")?;

    info!("Stopping price refresh service...");
    price_refresh_service.stop().await;

    Ok(())
}
