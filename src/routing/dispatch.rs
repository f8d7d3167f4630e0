//! Rule priority tables.
//!
//! # Responsibilities
//! - Declare the ordered custom-action rules tried for every method
//! - Declare each method's ordered CRUD fallback chain
//! - Turn a rule match into a `ResolvedRoute`
//!
//! # Design Decisions
//! - Priority is data: each table is a `&'static [Step]` evaluated in order
//! - First full match wins; later steps are never evaluated
//! - Unknown methods get an empty chain, never a silent default

use crate::routing::grammar::Slot;
use crate::routing::matcher::{Matcher, RuleKind, RuleMatch};
use crate::routing::route::{ContextId, ResolvedRoute};

/// Where a step takes its action name from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSource {
    /// The `action` segment captured from the path.
    Segment,
    /// A verb implied by the HTTP method.
    Default(&'static str),
}

/// One entry of a priority table: a path shape plus how to read its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: RuleKind,
    pub action: ActionSource,
}

impl Step {
    pub const fn new(kind: RuleKind, action: ActionSource) -> Self {
        Self { kind, action }
    }

    /// Try this step against a normalized path.
    pub fn try_resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let matched = self.kind.rule().match_path(path)?;
        self.extract(&matched)
    }

    fn extract(&self, matched: &RuleMatch<'_>) -> Option<ResolvedRoute> {
        let service = matched.get(Slot::Service)?;
        let command = match matched.get(Slot::Module) {
            Some(module) => format!("{}/{}", module, service),
            None => service.to_string(),
        };

        let action = match self.action {
            ActionSource::Segment => matched.get(Slot::Action)?.to_string(),
            ActionSource::Default(verb) => verb.to_string(),
        };

        let context_id = if let Some(uuid) = matched.get(Slot::Uuid) {
            ContextId::Uuid(uuid.to_string())
        } else if let Some(integer) = matched.get(Slot::Integer) {
            ContextId::Integer(integer.to_string())
        } else {
            ContextId::None
        };

        Some(ResolvedRoute {
            command,
            action,
            context_id,
        })
    }

    /// Description of the action column, e.g. `retrieve` or `<action>`.
    pub fn action_label(&self) -> &'static str {
        match self.action {
            ActionSource::Segment => "<action>",
            ActionSource::Default(verb) => verb,
        }
    }
}

/// Custom-action rules tried before any method dispatch.
pub const CUSTOM_STEPS: &[Step] = &[
    Step::new(RuleKind::ModuleServiceActionUuid, ActionSource::Segment),
    Step::new(RuleKind::ModuleServiceActionInteger, ActionSource::Segment),
    Step::new(RuleKind::ServiceAction, ActionSource::Segment),
];

/// Custom-action rules without the two-segment `/service/action` shortcut.
pub const CUSTOM_STEPS_WITHOUT_SERVICE_ACTION: &[Step] = &[
    Step::new(RuleKind::ModuleServiceActionUuid, ActionSource::Segment),
    Step::new(RuleKind::ModuleServiceActionInteger, ActionSource::Segment),
];

pub const GET_STEPS: &[Step] = &[
    Step::new(RuleKind::ModuleServiceUuid, ActionSource::Default("retrieve")),
    Step::new(RuleKind::ModuleServiceInteger, ActionSource::Default("retrieve")),
    Step::new(RuleKind::ModuleServiceAction, ActionSource::Segment),
    Step::new(RuleKind::ModuleService, ActionSource::Default("index")),
];

pub const POST_STEPS: &[Step] = &[
    Step::new(RuleKind::ModuleServiceAction, ActionSource::Segment),
    Step::new(RuleKind::ModuleService, ActionSource::Default("create")),
];

pub const PUT_STEPS: &[Step] = &[
    Step::new(RuleKind::ModuleServiceUuid, ActionSource::Default("update")),
    Step::new(RuleKind::ModuleServiceInteger, ActionSource::Default("update")),
];

pub const DELETE_STEPS: &[Step] = &[
    Step::new(RuleKind::ModuleServiceUuid, ActionSource::Default("delete")),
    Step::new(RuleKind::ModuleServiceInteger, ActionSource::Default("delete")),
];

/// Methods with a fallback chain, in table order.
pub const DISPATCH_TABLE: &[(&str, &[Step])] = &[
    ("get", GET_STEPS),
    ("post", POST_STEPS),
    ("put", PUT_STEPS),
    ("delete", DELETE_STEPS),
];

/// Fallback chain for a lowercased method name. Empty for unknown methods.
pub fn fallback_chain(method: &str) -> &'static [Step] {
    DISPATCH_TABLE
        .iter()
        .find(|(name, _)| *name == method)
        .map(|(_, steps)| *steps)
        .unwrap_or(&[])
}

/// First step in `steps` that fully matches `path`.
pub fn first_match(steps: &[Step], path: &str) -> Option<(RuleKind, ResolvedRoute)> {
    steps
        .iter()
        .find_map(|step| step.try_resolve(path).map(|route| (step.kind, route)))
}
