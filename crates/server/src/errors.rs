use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use deadpool_sqlite::{InteractError, PoolError};
use shared::api::payloads::ErrorResponse;
use tracing::error;

use crate::db::StoreError;

pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new<S: Into<String>>(code: StatusCode, message: S) -> Self {
        AppError { code, message: message.into() }
    }

    pub fn internal<E: fmt::Debug>(err: E) -> Self {
        error!(?err, "Internal error");
        AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppError {}: {}", self.code, self.message)
    }
}

// Render AppError into a json error envelope
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.code, Json(ErrorResponse { error: self.message })).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(inner) => AppError::new(StatusCode::BAD_REQUEST, inner.to_string()),
            e @ StoreError::NotFound { .. } => AppError::new(StatusCode::NOT_FOUND, e.to_string()),
            StoreError::Persistence(inner) => AppError::internal(inner),
        }
    }
}

impl From<InteractError> for AppError {
    fn from(err: InteractError) -> Self {
        AppError::internal(err)
    }
}

impl From<PoolError> for AppError {
    fn from(err: PoolError) -> Self {
        AppError::internal(err)
    }
}
