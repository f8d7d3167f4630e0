//! Route rule matching.
//!
//! # Responsibilities
//! - Compile each rule kind into an anchored pattern once
//! - Match a normalized path against a rule (whole path, start to end)
//! - Hand back the captured segments by slot
//!
//! # Design Decisions
//! - One compiled rule per `RuleKind`, stored in a process-wide static
//! - Rules are immutable after compilation (shared without locks)
//! - Partial matches never count: every pattern is `^...$` anchored

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::routing::grammar::{anchored_pattern, Slot};

/// Trait for matching normalized paths against a path shape.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the captured segments if the whole path matches.
    fn match_path<'p>(&self, path: &'p str) -> Option<RuleMatch<'p>>;
}

/// Every path shape the resolver knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    ModuleServiceActionUuid,
    ModuleServiceActionInteger,
    ServiceAction,
    ModuleServiceUuid,
    ModuleServiceInteger,
    ModuleServiceAction,
    ModuleService,
}

impl RuleKind {
    pub const ALL: [RuleKind; 7] = [
        RuleKind::ModuleServiceActionUuid,
        RuleKind::ModuleServiceActionInteger,
        RuleKind::ServiceAction,
        RuleKind::ModuleServiceUuid,
        RuleKind::ModuleServiceInteger,
        RuleKind::ModuleServiceAction,
        RuleKind::ModuleService,
    ];

    /// Ordered slots making up this shape.
    pub fn slots(self) -> &'static [Slot] {
        use Slot::*;
        match self {
            RuleKind::ModuleServiceActionUuid => &[Module, Service, Action, Uuid],
            RuleKind::ModuleServiceActionInteger => &[Module, Service, Action, Integer],
            RuleKind::ServiceAction => &[Service, Action],
            RuleKind::ModuleServiceUuid => &[Module, Service, Uuid],
            RuleKind::ModuleServiceInteger => &[Module, Service, Integer],
            RuleKind::ModuleServiceAction => &[Module, Service, Action],
            RuleKind::ModuleService => &[Module, Service],
        }
    }

    /// Stable label used in logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            RuleKind::ModuleServiceActionUuid => "module_service_action_uuid",
            RuleKind::ModuleServiceActionInteger => "module_service_action_integer",
            RuleKind::ServiceAction => "service_action",
            RuleKind::ModuleServiceUuid => "module_service_uuid",
            RuleKind::ModuleServiceInteger => "module_service_integer",
            RuleKind::ModuleServiceAction => "module_service_action",
            RuleKind::ModuleService => "module_service",
        }
    }

    /// Human readable shape, e.g. `/module/service/uuid`.
    pub fn shape(self) -> String {
        self.slots()
            .iter()
            .map(|slot| format!("/{}", slot.name()))
            .collect()
    }

    /// The compiled rule for this shape.
    pub fn rule(self) -> &'static RouteRule {
        &COMPILED_RULES[self as usize]
    }
}

static COMPILED_RULES: Lazy<Vec<RouteRule>> =
    Lazy::new(|| RuleKind::ALL.iter().map(|kind| RouteRule::compile(*kind)).collect());

/// A compiled, anchored path-shape pattern.
#[derive(Debug)]
pub struct RouteRule {
    kind: RuleKind,
    pattern: Regex,
}

impl RouteRule {
    fn compile(kind: RuleKind) -> Self {
        let pattern = Regex::new(&anchored_pattern(kind.slots()))
            .expect("route grammar produces valid patterns");
        Self { kind, pattern }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Matcher for RouteRule {
    fn match_path<'p>(&self, path: &'p str) -> Option<RuleMatch<'p>> {
        let caps = self.pattern.captures(path)?;
        let mut matched = RuleMatch::new();
        for slot in self.kind.slots() {
            if let Some(m) = caps.name(slot.name()) {
                matched.set(*slot, m.as_str());
            }
        }
        Some(matched)
    }
}

/// Segments captured by a successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'p> {
    module: Option<&'p str>,
    service: Option<&'p str>,
    action: Option<&'p str>,
    uuid: Option<&'p str>,
    integer: Option<&'p str>,
}

impl<'p> RuleMatch<'p> {
    fn new() -> Self {
        Self {
            module: None,
            service: None,
            action: None,
            uuid: None,
            integer: None,
        }
    }

    fn set(&mut self, slot: Slot, value: &'p str) {
        match slot {
            Slot::Module => self.module = Some(value),
            Slot::Service => self.service = Some(value),
            Slot::Action => self.action = Some(value),
            Slot::Uuid => self.uuid = Some(value),
            Slot::Integer => self.integer = Some(value),
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&'p str> {
        match slot {
            Slot::Module => self.module,
            Slot::Service => self.service,
            Slot::Action => self.action,
            Slot::Uuid => self.uuid,
            Slot::Integer => self.integer,
        }
    }
}
