use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No file uploaded")]
    NoFileUploaded,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Quiz generation failed: {0}")]
    GenerationError(String),

    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NoFileUploaded => "NO_FILE_UPLOADED",
            AppError::UnsupportedFileType(_) => "UNSUPPORTED_FILE_TYPE",
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::GenerationError(_) => "GENERATION_ERROR",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NoFileUploaded => StatusCode::BAD_REQUEST,
            AppError::UnsupportedFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::InvalidState(_) => StatusCode::CONFLICT,
            AppError::GenerationError(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
