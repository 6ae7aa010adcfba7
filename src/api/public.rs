//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

// Errors

pub struct ApiError {
    status: StatusCode,
    error: anyhow::Error,
}

impl ApiError {
    /// The request couldn't be understood
    pub fn bad_request<E: Into<anyhow::Error>>(err: E) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: err.into(),
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{}", self.error);
        } else {
            tracing::warn!("Rejected request: {}", self.error);
        }

        let msg = if self.status.is_server_error() {
            format!("Something went wrong: {}", self.error)
        } else {
            format!("Invalid request: {}", self.error)
        };

        (self.status, msg).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: err.into(),
        }
    }
}

// Re-export public types from each route

pub mod bot {
    pub use crate::api::routes::bot::public::*;
}

pub mod contact {
    pub use crate::api::routes::contact::public::*;
}
