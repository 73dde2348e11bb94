//! Axum route handlers for the portfolio pages.

use anyhow::Context;
use axum::{
    extract::{multipart::MultipartError, FromRequest, Multipart, Path, Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::{debug, info, warn};

use crate::cv::{attachment_disposition, generate_cv, CV_CONTENT_TYPE};
use crate::errors::AppError;
use crate::models::contact::{ContactForm, ContactSubmission};
use crate::render;
use crate::state::AppState;

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Html<String> {
    Html(render::home_page(&state.store))
}

/// GET /project/:id
///
/// An unknown id redirects home with 302 instead of returning 404.
pub async fn handle_project(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.find_project_by_id(&id) {
        Some(project) => {
            debug!("Rendering project {id}");
            Html(render::project_page(&state.store, project)).into_response()
        }
        None => {
            info!("Unknown project id '{id}', redirecting home");
            redirect_home()
        }
    }
}

/// POST /contact
///
/// Demo behavior: the submission is echoed back and then dropped. Accepts
/// urlencoded and multipart bodies; any other body counts as a form with no fields.
pub async fn handle_contact(State(state): State<AppState>, request: Request) -> Html<String> {
    let form = read_contact_form(request).await;
    let submission = ContactSubmission::from(form);
    debug!("Contact form submitted by {}", submission.email);
    Html(render::thank_you_page(&state.store, &submission))
}

async fn read_contact_form(request: Request) -> ContactForm {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    if is_multipart {
        return match Multipart::from_request(request, &()).await {
            Ok(multipart) => ContactForm::from_pairs(read_multipart_fields(multipart).await),
            Err(e) => {
                warn!("Rejected multipart contact body: {e}");
                ContactForm::default()
            }
        };
    }

    // Pairs rather than a struct, so a repeated key keeps its first value.
    match Form::<Vec<(String, String)>>::from_request(request, &()).await {
        Ok(Form(pairs)) => ContactForm::from_pairs(pairs),
        Err(e) => {
            debug!("No urlencoded contact body: {e}");
            ContactForm::default()
        }
    }
}

// A malformed part stops reading; fields decoded before it are kept.
async fn read_multipart_fields(mut multipart: Multipart) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    loop {
        match next_text_field(&mut multipart).await {
            Ok(Some(pair)) => pairs.push(pair),
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart contact field: {e}");
                break;
            }
        }
    }
    pairs
}

async fn next_text_field(
    multipart: &mut Multipart,
) -> Result<Option<(String, String)>, MultipartError> {
    let Some(field) = multipart.next_field().await? else {
        return Ok(None);
    };
    let name = field.name().unwrap_or_default().to_string();
    let value = field.text().await?;
    Ok(Some((name, value)))
}

/// GET /download-cv
pub async fn handle_download_cv(State(state): State<AppState>) -> Result<Response, AppError> {
    let store = &state.store;
    let body = generate_cv(&store.profile, &store.education, &store.experience);
    let disposition = HeaderValue::from_str(&attachment_disposition(&state.config.cv_filename))
        .context("CV filename is not a valid header value")?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(CV_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
