//! Unified error types for storefront services.
//! Used by: store, telemetry, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0} store lock poisoned")]
    LockPoisoned(&'static str),

    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::LockPoisoned(_) | Error::Metrics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_returns_404() {
        let response = Error::NotFound("Product").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn lock_poisoned_returns_500() {
        let response = Error::LockPoisoned("User").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(Error::NotFound("Product").to_string(), "Product not found");
        assert_eq!(Error::NotFound("User").to_string(), "User not found");
        assert_eq!(
            Error::LockPoisoned("Product").to_string(),
            "Product store lock poisoned"
        );
    }
}
