//! Resolution errors.

use thiserror::Error;

/// Errors produced while resolving a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No rule in the custom list or the method's fallback chain matched.
    #[error("Invalid {method} request")]
    InvalidRequest { method: String },
}

impl RouteError {
    pub fn invalid_request(method: impl Into<String>) -> Self {
        RouteError::InvalidRequest {
            method: method.into(),
        }
    }

    pub fn method(&self) -> &str {
        match self {
            RouteError::InvalidRequest { method } => method,
        }
    }
}
