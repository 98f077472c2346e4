//! Lifecycle contracts (LIFECYCLE-001 through LIFECYCLE-005)
//!
//! Construction never fails, structural errors are deferred to
//! `validate_definition`, and the valid flag only moves forward.

use crate::common::*;
use markdef::{
    DefinitionBuilder, DependencySet, LocatedError, Location, ParseCause, StructuralError,
};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;

/// CONTRACT LIFECYCLE-001: First Parse Error Wins
///
/// The first cause handed to `set_parse_error` is the one
/// `validate_definition` reports; later causes are dropped.
mod first_error_wins {
    use super::*;

    #[test]
    fn contract_later_errors_are_ignored() {
        let mut b = named("ui:button");
        b.set_parse_error(LocatedError::new("causeA", None))
            .set_parse_error(LocatedError::new("causeB", None))
            .set_parse_error(StructuralError::invalid("causeC", None));
        let def = b.build();

        let err = def.validate_definition().unwrap_err();
        let shown = err.to_string();
        assert!(shown.contains("causeA"), "{shown}");
        assert!(!shown.contains("causeB"), "{shown}");
        assert!(!shown.contains("causeC"), "{shown}");
    }

    #[test]
    fn contract_structural_errors_are_stored_as_is() {
        let original = StructuralError::MissingAttribute {
            attribute: "name".to_string(),
            location: Some(Location::new("ui/button.cmp", 1, 1, 0)),
        };
        let mut b = DefinitionBuilder::new();
        b.set_parse_error(original.clone());
        let def = b.build();

        assert_eq!(
            def.validate_definition().unwrap_err().to_string(),
            original.to_string()
        );
    }

    #[test]
    fn contract_foreign_cause_keeps_message_and_location() {
        let location = Location::new("ui/button.cmp", 7, 2, 0);
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "unexpected end of markup");

        let mut b = DefinitionBuilder::new();
        b.set_parse_error(ParseCause::foreign_at(io, location.clone()));
        let err = b.build().validate_definition().unwrap_err();

        assert_eq!(err.location(), Some(&location));
        assert!(err.cause().is_some());
        insta::assert_snapshot!(
            err.to_string(),
            @"invalid definition at ui/button.cmp:7:2: unexpected end of markup"
        );
    }
}

/// CONTRACT LIFECYCLE-002: Deferred, Repeatable Structural Validation
///
/// `build` never fails; `validate_definition` reports the stored error on
/// every call and nothing when no error was recorded.
mod deferred_validation {
    use super::*;

    #[test]
    fn contract_no_error_means_validation_passes() {
        let def = named("ui:button").build();
        assert!(def.validate_definition().is_ok());
        assert!(def.validate_definition().is_ok());
    }

    #[test]
    fn contract_stored_error_is_raised_every_time() {
        let mut b = named("ui:button");
        b.set_parse_error(LocatedError::new("unclosed tag", None));
        let def = b.build();

        let first = def.validate_definition().unwrap_err();
        let second = def.validate_definition().unwrap_err();
        assert_eq!(first.to_string(), second.to_string());
        assert!(Arc::ptr_eq(
            first.cause().unwrap(),
            second.cause().unwrap()
        ));
    }

    #[test]
    fn contract_parse_error_does_not_block_other_operations() {
        let mut b = named("ui:button");
        b.set_parse_error(LocatedError::new("unclosed tag", None));
        let def = b.build();

        assert_eq!(def.to_string(), "ui:button");
        assert_eq!(def.own_hash(), "");
        assert!(def.dependency_set().is_empty());
        assert!(!def.is_valid());
    }
}

/// CONTRACT LIFECYCLE-003: Dependency Set Is Computed Once
mod dependency_set_memoized {
    use super::*;

    #[test]
    fn contract_same_instance_on_every_call() {
        let kind = Listed::new(vec![cmp("ui:base"), iface("ui:clickable")]);
        let calls = kind.calls();
        let def = named("ui:button").build_with(kind);

        let first = def.dependency_set();
        let second = def.dependency_set();
        assert!(std::ptr::eq(first, second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn contract_duplicates_collapse_in_first_seen_order() {
        let a = cmp("ui:a");
        let b = cmp("ui:b");
        let def = named("ui:x").build_with(Listed::new(vec![a.clone(), a.clone(), b.clone()]));

        assert_eq!(def.dependency_set().as_slice(), &[a, b]);
    }

    #[test]
    fn contract_concurrent_first_calls_compute_once() {
        let kind = Listed::new((0..32).map(|i| cmp(&format!("ui:d{i}"))).collect());
        let calls = kind.calls();
        let def = Arc::new(named("ui:x").build_with(kind));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let def = Arc::clone(&def);
                thread::spawn(move || def.dependency_set() as *const DependencySet as usize)
            })
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(def.dependency_set().len(), 32);
    }
}

/// CONTRACT LIFECYCLE-004: Display Stays Traceable
mod display {
    use super::*;

    #[test]
    fn contract_named_definition_displays_its_name() {
        assert_eq!(named("ns:Foo").build().to_string(), "ns:Foo");
    }

    #[test]
    fn contract_anonymous_definition_shows_location_and_description() {
        let mut b = DefinitionBuilder::new();
        b.set_description("bad markup")
            .set_location(Location::for_file("file.cmp", 0).with_line(3));
        let shown = b.build().to_string();
        assert!(shown.contains("file.cmp:3"), "{shown}");
        assert!(shown.contains("bad markup"), "{shown}");
    }

    #[test]
    fn contract_bare_definition_still_displays() {
        insta::assert_snapshot!(
            DefinitionBuilder::new().build().to_string(),
            @"INVALID[<unknown location>]: <no description>"
        );
    }
}

/// CONTRACT LIFECYCLE-005: Valid Flag Only Moves Forward
mod valid_flag {
    use super::*;

    #[test]
    fn contract_fresh_definition_is_not_valid() {
        assert!(!named("ui:button").build().is_valid());
    }

    #[test]
    fn contract_mark_valid_sticks() {
        let def = named("ui:button").build();
        def.mark_valid();
        def.mark_valid();
        assert!(def.is_valid());
    }

    #[test]
    fn contract_mark_valid_does_not_require_validation() {
        let mut b = named("ui:button");
        b.set_parse_error(LocatedError::new("unclosed tag", None));
        let def = b.build();

        def.mark_valid();
        assert!(def.is_valid());
        assert!(def.validate_definition().is_err());
    }
}
