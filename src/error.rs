//! Error types for Bookshelf server

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::api::IndentedJson;

/// Main application error type
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body could not be parsed; answered with a bare 400
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl AppError {
    /// Answer to a lookup by path id
    pub fn book_not_found() -> Self {
        AppError::NotFound("Book not found.".to_string())
    }

    /// Answer to a checkout or return of an unknown id
    pub fn unknown_book() -> Self {
        AppError::NotFound("Book not found".to_string())
    }

    pub fn no_books_left() -> Self {
        AppError::InsufficientStock("No more books left".to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InsufficientStock(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MalformedInput(detail) => {
                tracing::debug!("Rejected request body: {}", detail);
                return StatusCode::BAD_REQUEST.into_response();
            }
        };

        (status, IndentedJson(ErrorResponse { message })).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
