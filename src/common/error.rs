use crate::common::response::ApiError;
use crate::infrastructure::media::MediaError;
use crate::infrastructure::storage::BlobError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing input or a referenced resource that does not exist.
    #[error("{0}")]
    Validation(String),
    #[error("AMS API call error: {message}")]
    Api { code: String, message: String },
    #[error("Error: {0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn missing_field(field: &str) -> Self {
        AppError::Validation(format!("Please pass {} in the input object", field))
    }

    pub fn not_found(message: &str) -> Self {
        AppError::Validation(message.to_string())
    }
}

impl From<MediaError> for AppError {
    fn from(e: MediaError) -> Self {
        match e {
            MediaError::Api { code, message, .. } => AppError::Api { code, message },
            other => AppError::Other(other.into()),
        }
    }
}

impl From<BlobError> for AppError {
    fn from(e: BlobError) -> Self {
        AppError::Other(e.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(message) => warn!("Rejected request: {}", message),
            AppError::Api { code, message } => error!(
                "AMS API call failed with error code: {} and message: {}",
                code, message
            ),
            AppError::Other(e) => error!("Exception with message: {:#}", e),
        }
        ApiError(self.to_string(), StatusCode::BAD_REQUEST).into_response()
    }
}

/// Unwraps a required request field.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::missing_field(field))
}
