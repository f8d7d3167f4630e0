//! Application input assembly.
//!
//! Combines a resolved route with the request payload so downstream
//! handlers receive a single object.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::routing::{ContextId, ResolvedRoute};

/// Errors reading the request payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON body must be an object")]
    NotAnObject,
}

/// What the router hands to a command handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppInput {
    pub command: String,
    pub action: String,
    pub context_id: ContextId,
    pub payload: Map<String, Value>,
}

impl AppInput {
    pub fn new(route: ResolvedRoute, payload: Map<String, Value>) -> Self {
        Self {
            command: route.command,
            action: route.action,
            context_id: route.context_id,
            payload,
        }
    }
}

/// Merge query pairs and a JSON object body into one payload.
///
/// Query values are strings; body fields override query keys of the same
/// name. An empty body contributes nothing.
pub fn build_payload(
    query: Vec<(String, String)>,
    body: &[u8],
) -> Result<Map<String, Value>, PayloadError> {
    let mut payload: Map<String, Value> = query
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(payload);
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Object(fields) => {
            payload.extend(fields);
            Ok(payload)
        }
        _ => Err(PayloadError::NotAnObject),
    }
}
