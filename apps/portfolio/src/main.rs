mod config;
mod cv;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod store;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::loader::load_portfolio;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Content is loaded and validated once; it is never written again
    let portfolio = load_portfolio(config.data_path.as_deref())
        .context("Failed to load portfolio content")?;
    info!("Serving static files from {}", config.static_dir.display());

    let addr = config.bind_addr();
    let state = AppState::new(portfolio, config);

    let app = build_router(state).layer(TraceLayer::new_for_http());

    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
