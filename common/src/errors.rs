//! Error taxonomy shared by all handlers.
//!
//! Every failure is local to the request that triggered it. Errors convert
//! into the standard JSON envelope via `IntoResponse`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::response::ApiResponse;

/// Convenient result alias used across the workspace.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required credential fields absent from the request body.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Required credential fields present but empty.
    #[error("Required fields cannot be empty: {}", .0.join(", "))]
    EmptyRequiredFields(Vec<String>),

    /// Generic request validation failure.
    #[error("{0}")]
    Validation(String),

    /// MySQL connection could not be established.
    #[error("Failed to connect to MySQL database: {0}")]
    MysqlConnect(String),

    /// MySQL connection established but the liveness check failed.
    #[error("Failed to ping MySQL database: {0}")]
    MysqlPing(String),

    /// MongoDB unreachable or the ping command failed.
    #[error("Failed to connect to MongoDB: {0}")]
    MongoConnect(String),

    /// The `.env` file could not be read.
    #[error("Error reading .env file: {0}")]
    DotenvRead(String),

    /// Catch-all for unexpected internal failures.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Maps the error to its HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields(_)
            | AppError::EmptyRequiredFields(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MysqlConnect(_)
            | AppError::MysqlPing(_)
            | AppError::MongoConnect(_)
            | AppError::DotenvRead(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiResponse::err(self.to_string());
        (status, Json(body)).into_response()
    }
}
