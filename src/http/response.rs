//! Error responses.
//!
//! # Design Decisions
//! - `InvalidRequest` maps to 404 Not Found
//! - Unreadable payloads map to 400 Bad Request
//! - Error bodies are JSON and carry the request ID

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::http::input::PayloadError;
use crate::routing::RouteError;

/// Everything the dispatch handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Route(RouteError::InvalidRequest { .. }) => StatusCode::NOT_FOUND,
            ApiError::Payload(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn into_response_with(self, request_id: &str) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            request_id,
        };
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: String,
    request_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError::from(RouteError::invalid_request("get"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Invalid get request");

        let err = ApiError::from(PayloadError::NotAnObject);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
