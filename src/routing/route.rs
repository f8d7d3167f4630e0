//! Resolution output types.

use std::fmt;

use serde::Serialize;

/// Identifier of the resource an action applies to.
///
/// The captured text is kept verbatim; integers are not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ContextId {
    #[default]
    None,
    Uuid(String),
    Integer(String),
}

impl ContextId {
    pub fn is_none(&self) -> bool {
        matches!(self, ContextId::None)
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextId::None => write!(f, "-"),
            ContextId::Uuid(value) => write!(f, "uuid:{}", value),
            ContextId::Integer(value) => write!(f, "integer:{}", value),
        }
    }
}

/// Target of a request: handler group, operation and optional resource id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedRoute {
    /// `module/service`, or a bare `service`.
    pub command: String,
    pub action: String,
    pub context_id: ContextId,
}

impl fmt::Display for ResolvedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{} [{}]", self.command, self.action, self.context_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_id_serializes_tagged() {
        let json = serde_json::to_value(ContextId::Integer("42".into())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "integer", "value": "42"}));

        let json = serde_json::to_value(ContextId::None).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "none"}));
    }

    #[test]
    fn test_context_id_display() {
        assert!(ContextId::None.is_none());
        assert!(!ContextId::Uuid("abc".into()).is_none());
        assert_eq!(ContextId::None.to_string(), "-");
        assert_eq!(ContextId::Uuid("abc".into()).to_string(), "uuid:abc");
    }

    #[test]
    fn test_route_display() {
        let route = ResolvedRoute {
            command: "accounts/users".into(),
            action: "retrieve".into(),
            context_id: ContextId::Integer("7".into()),
        };
        assert_eq!(route.to_string(), "accounts/users#retrieve [integer:7]");
    }
}
