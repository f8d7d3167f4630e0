//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → routing::Resolver (command, action, context id)
//!     → input.rs (attach query/body payload → AppInput)
//!     → response.rs (error mapping)
//!     → Send to client
//! ```

pub mod input;
pub mod request;
pub mod response;
pub mod server;

pub use input::AppInput;
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::HttpServer;
