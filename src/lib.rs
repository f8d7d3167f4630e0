//! Command router library.
//!
//! Resolves `(method, path)` pairs to a command, an action and an optional
//! context id using a fixed, ordered set of path-shape rules.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{ContextId, ResolvedRoute, Resolver, RouteError, RuleSet};
