use std::sync::Arc;

use crate::config::Config;
use crate::models::portfolio::Portfolio;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup; requests share it without locking.
    pub store: Arc<Portfolio>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Portfolio, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}
