use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// An unknown project id is deliberately not an error: it redirects home.
#[derive(Debug, Error)]
pub enum AppError {
    /// Carries the pre-rendered not-found page, since error rendering has no access to state.
    #[error("Not found: {path}")]
    NotFound { path: String, page: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { path, page } => {
                tracing::debug!("No route for {path}");
                (StatusCode::NOT_FOUND, Html(page)).into_response()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred",
                )
                    .into_response()
            }
        }
    }
}
