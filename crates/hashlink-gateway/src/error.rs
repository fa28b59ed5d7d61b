use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hashlink_core::StoreError;
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid url")]
    InvalidUrl,
    #[error("invalid request")]
    InvalidRequest,
    #[error("url not found")]
    NotFound,
    #[error("stored url is not a valid redirect target")]
    InvalidTarget,
    #[error("store operation failed: {0}")]
    Store(#[source] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::InvalidRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidTarget | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(_) => AppError::NotFound,
            other => AppError::Store(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Store(source) => {
                error!(error = %source, "store operation failed");
                "internal error".to_string()
            }
            AppError::InvalidTarget => {
                error!("stored url cannot be used as a redirect target");
                "internal error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
