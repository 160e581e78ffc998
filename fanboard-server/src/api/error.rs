//! Error-to-HTTP mapping
//!
//! Every failure leaves the service as an HTTP status plus a JSON body of
//! the shape `{"error":{"message":...,"status":...}}`. Nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fanboard_common::Error;
use serde::Serialize;
use tracing::error;

/// JSON error body, matching the client's expected shape
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

/// Error surfaced to the HTTP caller
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Unauthorized => Self::new(StatusCode::UNAUTHORIZED, "Unauthorized"),
            Error::Conflict(message) => Self::new(StatusCode::BAD_REQUEST, message),
            Error::NotFound(message) => Self::new(StatusCode::NOT_FOUND, message),
            Error::Database(e) => {
                error!("Database error: {}", e);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            Error::Io(e) => {
                error!("IO error: {}", e);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            Error::Config(message) | Error::Internal(message) => {
                error!("Internal error: {}", message);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: ErrorDetail {
                message: self.message,
                status: self.status.as_u16(),
            },
        });
        (self.status, body).into_response()
    }
}
