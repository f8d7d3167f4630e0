//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, raw URI, API prefix)
//!     → normalize.rs (lowercase, entry point, strip prefix)
//!     → router.rs (custom rules, then method fallback chain)
//!     → dispatch.rs (ordered priority tables)
//!     → matcher.rs (anchored pattern per rule kind)
//!     → Return: ResolvedRoute or InvalidRequest
//!
//! Rule compilation (first use):
//!     grammar.rs slots
//!     → anchored patterns per RuleKind
//!     → frozen in a process-wide static
//! ```
//!
//! # Design Decisions
//! - Rule set is fixed; nothing is registered at runtime
//! - Deterministic: same input always resolves to the same route
//! - First full match wins (ordered by priority table)

pub mod dispatch;
pub mod error;
pub mod grammar;
pub mod matcher;
pub mod normalize;
pub mod route;
pub mod router;

pub use error::RouteError;
pub use matcher::RuleKind;
pub use normalize::RequestDescriptor;
pub use route::{ContextId, ResolvedRoute};
pub use router::{Resolver, RuleSet};
