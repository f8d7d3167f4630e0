//! Route resolution.
//!
//! # Responsibilities
//! - Normalize the incoming method and URI
//! - Evaluate the custom rules, then the method's fallback chain
//! - Return the resolved route or an explicit error
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over a handful of anchored patterns
//! - Explicit `InvalidRequest` rather than an empty route

use crate::observability::metrics;
use crate::routing::dispatch::{
    fallback_chain, first_match, Step, CUSTOM_STEPS, CUSTOM_STEPS_WITHOUT_SERVICE_ACTION,
};
use crate::routing::error::RouteError;
use crate::routing::normalize::RequestDescriptor;
use crate::routing::route::ResolvedRoute;

/// The custom-action rules in force ahead of method dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    custom: &'static [Step],
}

impl RuleSet {
    /// `/m/s/a/uuid`, `/m/s/a/integer`, `/service/action`.
    pub fn standard() -> Self {
        Self {
            custom: CUSTOM_STEPS,
        }
    }

    /// Standard rules minus `/service/action`, so two-segment paths reach
    /// the method's `/module/service` fallback.
    pub fn without_service_action() -> Self {
        Self {
            custom: CUSTOM_STEPS_WITHOUT_SERVICE_ACTION,
        }
    }

    pub fn from_flag(service_action_rule: bool) -> Self {
        if service_action_rule {
            Self::standard()
        } else {
            Self::without_service_action()
        }
    }

    pub fn custom_steps(&self) -> &'static [Step] {
        self.custom
    }

    /// Every step tried for `method`, in priority order.
    pub fn steps_for(&self, method: &str) -> Vec<Step> {
        self.custom
            .iter()
            .chain(fallback_chain(method))
            .copied()
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Resolves requests to commands.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    rules: RuleSet,
}

impl Resolver {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Resolve raw request parts.
    pub fn resolve(
        &self,
        method: &str,
        raw_uri: &str,
        api_prefix: &str,
    ) -> Result<ResolvedRoute, RouteError> {
        self.resolve_descriptor(&RequestDescriptor::new(method, raw_uri, api_prefix))
    }

    /// Resolve an already normalized request.
    pub fn resolve_descriptor(
        &self,
        request: &RequestDescriptor,
    ) -> Result<ResolvedRoute, RouteError> {
        let method = request.method();
        let path = request.path();

        let matched = first_match(self.rules.custom, path)
            .or_else(|| first_match(fallback_chain(method), path));

        match matched {
            Some((kind, route)) => {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    rule = kind.label(),
                    command = %route.command,
                    action = %route.action,
                    context_id = %route.context_id,
                    "Route resolved"
                );
                metrics::record_resolution(kind.label());
                Ok(route)
            }
            None => {
                tracing::debug!(method = %method, path = %path, "No rule matched");
                metrics::record_rejection(metrics::method_label(method));
                Err(RouteError::invalid_request(method))
            }
        }
    }
}
