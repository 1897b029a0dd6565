mod api_doc;
mod config;
mod dictionary;
mod error;
mod handlers;
mod models;
mod routes;
mod similarity;
mod state;
mod validation;

use anyhow::Context;
use config::Config;
use dictionary::Dictionary;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("word-dictionary starting");

    let config = Config::load()?;
    config.log_startup();

    let dictionary = Dictionary::seeded();
    tracing::info!("Dictionary seeded with {} words", dictionary.len());

    let app = routes::router(AppState::new(dictionary));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("word-dictionary stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        return;
    }
    tracing::info!("Shutdown signal received");
}
