//! Request normalization.
//!
//! # Responsibilities
//! - Lowercase method and path (ASCII only)
//! - Map the root URI to the default entry point
//! - Strip the configured API prefix
//!
//! # Design Decisions
//! - Prefix is stripped on a segment boundary only, so the result keeps
//!   its leading `/` (`/api` strips `/api/x`, not `/apiary/x`)
//! - A URI equal to the prefix is the root of the API
//! - The query string never takes part in matching

/// Path appended to the prefix when the root is requested.
pub const DEFAULT_ENTRY_POINT: &str = "/index/index";

/// Normalized per-request input to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: String,
    path: String,
    api_prefix: String,
}

impl RequestDescriptor {
    /// Build a descriptor from raw request parts.
    pub fn new(method: &str, raw_uri: &str, api_prefix: &str) -> Self {
        let method = method.to_ascii_lowercase();
        let api_prefix = normalize_prefix(api_prefix);
        let path = normalize_path(raw_uri, &api_prefix);
        Self {
            method,
            path,
            api_prefix,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Path relative to the API prefix, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }
}

/// Normalize a raw URI against a prefix. Both are lowercased.
pub fn normalize(method: &str, raw_uri: &str, api_prefix: &str) -> (String, String) {
    let descriptor = RequestDescriptor::new(method, raw_uri, api_prefix);
    (descriptor.method, descriptor.path)
}

fn normalize_prefix(api_prefix: &str) -> String {
    api_prefix.trim_end_matches('/').to_ascii_lowercase()
}

fn normalize_path(raw_uri: &str, prefix: &str) -> String {
    let uri = raw_uri.split('?').next().unwrap_or_default().to_ascii_lowercase();

    if uri.is_empty() || uri == "/" {
        return DEFAULT_ENTRY_POINT.to_string();
    }

    let relative = match uri.strip_prefix(prefix) {
        Some(rest) if !prefix.is_empty() && (rest.is_empty() || rest == "/") => {
            return DEFAULT_ENTRY_POINT.to_string();
        }
        Some(rest) if rest.starts_with('/') => rest,
        _ => uri.as_str(),
    };

    if relative.starts_with('/') {
        relative.to_string()
    } else {
        format!("/{}", relative)
    }
}
