//! Hash contracts (HASH-001 through HASH-003)
//!
//! A definition's own hash is never absent, and a hash handle supplied to
//! the builder wins over a literal string set before it.

use crate::common::*;
use markdef::{ContentHash, DefinitionBuilder, HashHandle};

/// CONTRACT HASH-001: Own Hash Is Never Absent
mod never_absent {
    use super::*;

    #[test]
    fn contract_no_hash_means_empty_string() {
        assert_eq!(DefinitionBuilder::new().build().own_hash(), "");
    }

    #[test]
    fn contract_unpopulated_handle_means_empty_string() {
        let mut b = named("ui:button");
        b.set_own_hash_handle(Some(HashHandle::new()));
        assert_eq!(b.build().own_hash(), "");
    }
}

/// CONTRACT HASH-002: Handle Replaces Literal
///
/// Supplying a handle clears an earlier literal; the handle's digest is
/// formatted on first read and cached.
mod handle_precedence {
    use super::*;

    #[test]
    fn contract_handle_clears_earlier_literal() {
        let handle = HashHandle::new();
        handle.set_from_bytes(b"<ui:button/>");

        let mut b = named("ui:button");
        b.set_own_hash("sha256:stale").set_own_hash_handle(Some(handle));

        assert_eq!(
            b.build().own_hash(),
            ContentHash::from_content("<ui:button/>").as_str()
        );
    }

    #[test]
    fn contract_literal_after_handle_is_kept() {
        let handle = HashHandle::new();
        handle.set_from_bytes(b"<ui:button/>");

        let mut b = named("ui:button");
        b.set_own_hash_handle(Some(handle)).set_own_hash("sha256:literal");

        assert_eq!(b.build().own_hash(), "sha256:literal");
    }

    #[test]
    fn contract_absent_handle_keeps_literal() {
        let mut b = named("ui:button");
        b.set_own_hash("sha256:literal").set_own_hash_handle(None);
        assert_eq!(b.build().own_hash(), "sha256:literal");
    }

    #[test]
    fn contract_handle_populated_after_supply_is_seen() {
        let handle = HashHandle::new();
        let mut b = named("ui:button");
        b.set_own_hash_handle(Some(handle.clone()));
        assert_eq!(b.own_hash(), None);

        handle.set_from_bytes(b"late");
        assert_eq!(b.own_hash(), Some(ContentHash::from_content("late").as_str()));
    }
}

/// CONTRACT HASH-003: Streaming and One-Shot Digests Agree
mod digest {
    use super::*;

    #[test]
    fn contract_reader_digest_matches_bytes_digest() {
        let source = "<ui:component>".repeat(2_000);

        let streamed = HashHandle::new();
        let read = streamed.compute_from_reader(source.as_bytes()).unwrap();
        assert_eq!(read, source.len() as u64);

        assert_eq!(
            streamed.formatted(),
            Some(ContentHash::from_content(&source).to_string())
        );
    }

    #[test]
    fn contract_handle_is_set_once() {
        let handle = HashHandle::new();
        assert!(handle.set_from_bytes(b"first"));
        assert!(!handle.set_from_bytes(b"second"));
        assert_eq!(handle.get(), Some(&ContentHash::from_content("first")));
    }
}
