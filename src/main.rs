use fishing_results_api::{app, config::ServerConfig, store::FishingResultStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting fishing results server...");

    let config = ServerConfig::from_env().expect("Invalid server configuration");
    let addr = config.addr();

    let store = FishingResultStore::seeded();
    tracing::info!(records = store.len().await, "Store seeded.");

    let app = app(store);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
