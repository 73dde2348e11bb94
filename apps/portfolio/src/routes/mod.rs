pub mod health;
pub mod pages;

use axum::{
    extract::State,
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::errors::AppError;
use crate::render;
use crate::state::AppState;

async fn not_found(State(state): State<AppState>, uri: Uri) -> Result<(), AppError> {
    Err(AppError::NotFound {
        path: uri.path().to_string(),
        page: render::not_found_page(&state.store, uri.path()),
    })
}

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::handle_home))
        .route("/project/:id", get(pages::handle_project))
        .route("/contact", post(pages::handle_contact))
        .route("/download-cv", get(pages::handle_download_cv))
        .route("/health", get(health::health_handler))
        .nest_service("/static", static_files)
        .fallback(not_found)
        .with_state(state)
}
