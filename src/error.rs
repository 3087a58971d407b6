use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Failures while building a timetable
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimetableError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Failures reading or writing the persisted configuration
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Configuration file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file is malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Failed to encode configuration: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Error returned by HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Timetable(#[from] TimetableError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid request body: {0}")]
    BadRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Timetable(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}
