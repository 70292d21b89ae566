// Error types shared by the HTTP handlers

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::models::ErrorResponse;
use crate::parser::ParseError;

pub const FILE_REQUIRED: &str = "file is required";
pub const FILE_NOT_CSV: &str = "file must be a csv";
pub const QUERY_REQUIRED: &str = "query param is required";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// The multipart body could not be read, including bodies over the size limit.
    #[error("Error reading upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("Error parsing file: {0}")]
    Parse(#[from] ParseError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

// Every failure maps to 500; clients depend on this status.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        warn!(error = %message, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { message }),
        )
            .into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
