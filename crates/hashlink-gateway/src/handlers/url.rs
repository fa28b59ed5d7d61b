use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use crate::validate::validate_url;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, trace};

/// `POST /` with the URL as the raw request body.
///
/// Responds with `201 Created` and the shortened link as plain text.
pub async fn create_url_handler(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let body = String::from_utf8(body.to_vec()).map_err(|_| AppError::InvalidUrl)?;
    validate_url(&body)?;

    let key = state.store().save(&body).await?;
    debug!(key = %key, url = %body, "shortened url");

    Ok((StatusCode::CREATED, key.to_url(state.base_url())).into_response())
}

/// `POST /api/shorten` with a JSON body `{"url": "..."}`.
///
/// The body is decoded regardless of the declared content type.
pub async fn shorten_handler(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let request: ShortenRequest =
        serde_json::from_slice(&body).map_err(|_| AppError::InvalidRequest)?;
    validate_url(&request.url)?;

    let key = state.store().save(&request.url).await?;
    debug!(key = %key, url = %request.url, "shortened url");

    let response = ShortenResponse {
        result: key.to_url(state.base_url()),
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// `GET /{key}`: redirects to the stored URL with `307 Temporary Redirect`.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    trace!(key = %key, "resolving key");

    let url = state.store().load(&key).await?;
    debug!(key = %key, url = %url, "resolved key");

    let location = HeaderValue::try_from(url).map_err(|_| AppError::InvalidTarget)?;
    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}
