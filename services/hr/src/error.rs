//! Custom error types for the HR service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::error::ValidationReport;
use serde_json::json;
use thiserror::Error;

/// Custom error type for the HR service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Payload failed field validation
    #[error("{0}")]
    Validation(#[from] ValidationReport),

    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(report) => {
                let body = Json(json!({
                    "errors": report,
                }));

                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            ApiError::BadRequest(msg) => {
                let body = Json(json!({
                    "error": msg,
                }));

                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

/// Type alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;
