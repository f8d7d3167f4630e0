//! Segment grammar for route patterns.
//!
//! # Responsibilities
//! - Define the named segment slots a rule can capture
//! - Provide the regex fragment each slot matches
//!
//! # Design Decisions
//! - Fragments assume lowercased input (the normalizer runs first)
//! - Word characters are ASCII only: `[0-9a-z_]`
//! - Slots are anchored to a single `/`-delimited segment; none of the
//!   fragments can match a `/`

/// Letter followed by at least one letter or digit.
pub const WORD_FRAGMENT: &str = "[a-z][a-z0-9]+";

/// 8-4-4-4-12 groups of word characters. Shape only, no version check.
pub const UUID_FRAGMENT: &str =
    "[0-9a-z_]{8}-[0-9a-z_]{4}-[0-9a-z_]{4}-[0-9a-z_]{4}-[0-9a-z_]{12}";

/// One or more decimal digits.
pub const INTEGER_FRAGMENT: &str = "[0-9]+";

/// A named segment in a route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Module,
    Service,
    Action,
    Uuid,
    Integer,
}

impl Slot {
    /// Capture group name used in the compiled pattern.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Module => "module",
            Slot::Service => "service",
            Slot::Action => "action",
            Slot::Uuid => "uuid",
            Slot::Integer => "integer",
        }
    }

    /// Regex fragment matched by this slot.
    pub fn fragment(self) -> &'static str {
        match self {
            Slot::Module | Slot::Service | Slot::Action => WORD_FRAGMENT,
            Slot::Uuid => UUID_FRAGMENT,
            Slot::Integer => INTEGER_FRAGMENT,
        }
    }

    /// Named capture group for this slot, e.g. `(?P<module>[a-z][a-z0-9]+)`.
    pub fn capture_group(self) -> String {
        format!("(?P<{}>{})", self.name(), self.fragment())
    }
}

/// Build an anchored pattern for a sequence of slots.
///
/// `[Module, Service]` becomes `^/(?P<module>..)/(?P<service>..)$`.
pub fn anchored_pattern(slots: &[Slot]) -> String {
    let body: String = slots
        .iter()
        .map(|slot| format!("/{}", slot.capture_group()))
        .collect();
    format!("^{}$", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn full(slot: Slot) -> Regex {
        Regex::new(&format!("^{}$", slot.fragment())).unwrap()
    }

    #[test]
    fn test_word_segments() {
        let re = full(Slot::Module);
        assert!(re.is_match("accounts"));
        assert!(re.is_match("v2"));
        assert!(re.is_match("ab"));
        assert!(!re.is_match("a")); // minimum length 2
        assert!(!re.is_match("2fa")); // must start with a letter
        assert!(!re.is_match("user-profile"));
        assert!(!re.is_match("user_profile"));
        assert!(!re.is_match(""));
    }

    #[test]
    fn test_uuid_shape() {
        let re = full(Slot::Uuid);
        assert!(re.is_match("550e8400-e29b-41d4-a716-446655440000"));
        // Word characters beyond hex are accepted: shape, not version.
        assert!(re.is_match("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz"));
        assert!(re.is_match("________-____-____-____-____________"));
        assert!(!re.is_match("550e8400-e29b-41d4-a716-44665544000"));
        assert!(!re.is_match("550e8400e29b41d4a716446655440000"));
    }

    #[test]
    fn test_integer_segments() {
        let re = full(Slot::Integer);
        assert!(re.is_match("0"));
        assert!(re.is_match("0042"));
        assert!(!re.is_match("-1"));
        assert!(!re.is_match("4.2"));
    }

    #[test]
    fn test_anchored_pattern() {
        let pattern = anchored_pattern(&[Slot::Service, Slot::Action]);
        assert_eq!(
            pattern,
            "^/(?P<service>[a-z][a-z0-9]+)/(?P<action>[a-z][a-z0-9]+)$"
        );
    }
}
