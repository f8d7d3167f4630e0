//! Property tests for route resolution.

use command_router::routing::{ContextId, Resolver, RouteError, RuleSet};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{1,10}"
}

fn uuid() -> impl Strategy<Value = String> {
    "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}"
}

fn http_method() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["GET", "post", "Put", "DELETE", "patch", "HEAD", "options"])
        .prop_map(str::to_string)
}

fn any_uri() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9_-]{0,12}", 0..6).prop_map(|segments| {
        format!("/{}", segments.join("/"))
    })
}

proptest! {
    #[test]
    fn action_uuid_resolves_for_every_method(
        method in http_method(),
        module in word(),
        service in word(),
        action in word(),
        id in uuid(),
    ) {
        let uri = format!("/{}/{}/{}/{}", module, service, action, id);
        let route = Resolver::default().resolve(&method, &uri, "").unwrap();
        prop_assert_eq!(route.command, format!("{}/{}", module, service));
        prop_assert_eq!(route.action, action);
        prop_assert_eq!(route.context_id, ContextId::Uuid(id));
    }

    #[test]
    fn action_integer_keeps_digits_verbatim(
        method in http_method(),
        module in word(),
        service in word(),
        action in word(),
        id in "[0-9]{1,20}",
    ) {
        let uri = format!("/api/{}/{}/{}/{}", module, service, action, id);
        let route = Resolver::default().resolve(&method, &uri, "/api").unwrap();
        prop_assert_eq!(route.context_id, ContextId::Integer(id));
    }

    #[test]
    fn resolution_is_idempotent(
        method in http_method(),
        uri in any_uri(),
        service_action in any::<bool>(),
    ) {
        let resolver = Resolver::new(RuleSet::from_flag(service_action));
        let first = resolver.resolve(&method, &uri, "");
        let second = resolver.resolve(&method, &uri, "");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn service_action_wins_over_two_segment_crud(
        method in http_method(),
        service in word(),
        action in word(),
    ) {
        let uri = format!("/{}/{}", service, action);
        let route = Resolver::new(RuleSet::standard()).resolve(&method, &uri, "").unwrap();
        prop_assert_eq!(route.command, service);
        prop_assert_eq!(route.action, action);
        prop_assert!(route.context_id.is_none());
    }

    #[test]
    fn success_never_yields_empty_names(
        method in http_method(),
        uri in any_uri(),
        service_action in any::<bool>(),
    ) {
        let resolver = Resolver::new(RuleSet::from_flag(service_action));
        match resolver.resolve(&method, &uri, "") {
            Ok(route) => {
                prop_assert!(!route.command.is_empty());
                prop_assert!(!route.action.is_empty());
            }
            Err(RouteError::InvalidRequest { method: m }) => {
                prop_assert_eq!(m, method.to_lowercase());
            }
        }
    }
}
