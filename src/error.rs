use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

use crate::uploads::UploadError;

/// Invalid input to one of the engines. Never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("area is required")]
    MissingArea,
    #[error("area must be a positive number of square meters, got {0}")]
    InvalidArea(f64),
    #[error("area {0} is too large to price")]
    AreaTooLarge(f64),
    #[error("at least two quotations are required for a comparison, got {0}")]
    InsufficientQuotations(usize),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("at least one answer is required")]
    NoAnswers,
}

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Request failed validation
    Validation(ValidationError),
    /// Malformed request outside the engines (uploads, missing fields)
    BadRequest(String),
    /// Entity not found
    NotFound(String),
    /// Upload exceeds the configured limit
    PayloadTooLarge(String),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Validation error: {}", err),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg.clone()),
            Self::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::Validation(_) => "validation_error",
        AppError::BadRequest(_) => "bad_request",
        AppError::NotFound(_) => "not_found",
        AppError::PayloadTooLarge(_) => "payload_too_large",
        AppError::InternalError(_) => "internal_error",
    }
}

// Implement conversions from common error types
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::TooLarge { .. } => Self::PayloadTooLarge(err.to_string()),
            UploadError::Io(e) => Self::from(e),
            UploadError::MissingFile | UploadError::UnsupportedType(_) => {
                Self::BadRequest(err.to_string())
            }
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(err.body_text())
        } else {
            Self::BadRequest(format!("Invalid multipart body: {}", err.body_text()))
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::InternalError(format!("I/O error: {}", err))
    }
}
