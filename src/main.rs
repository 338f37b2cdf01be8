use anyhow::Result;
use pay_relay::{
    config::Config,
    handlers::{self, AppState},
    services::{GatewayClient, OrderSequence},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting pay-relay v{}", env!("CARGO_PKG_VERSION"));

    // Initialize services
    let gateway = Arc::new(GatewayClient::new(&config.gateway_url));
    let orders = Arc::new(OrderSequence::new());

    let state = AppState { gateway, orders };

    let app = handlers::router(state, &config.static_dir);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Relay listening on http://{}", addr);
    tracing::info!("Forwarding gateway calls to {}", config.gateway_url);
    tracing::info!("Serving static assets from {}/", config.static_dir);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl+c");
    tracing::info!("Shutting down gracefully...");
}
