//! Property tests for dependency sets.

use proptest::prelude::*;

use std::sync::atomic::Ordering;

use crate::common::{cmp, named, Listed};
use markdef::Descriptor;

fn descriptors() -> impl Strategy<Value = Vec<Descriptor>> {
    // Small name space so duplicates are common
    proptest::collection::vec(0u8..6, 0..24)
        .prop_map(|ids| ids.into_iter().map(|i| cmp(&format!("ns:d{i}"))).collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The set holds each appended descriptor once, in
    /// first-seen order.
    #[test]
    fn property_set_is_first_seen_order_without_duplicates(
        appended in descriptors()
    ) {
        let mut expected: Vec<Descriptor> = Vec::new();
        for d in &appended {
            if !expected.contains(d) {
                expected.push(d.clone());
            }
        }

        let def = named("ns:x").build_with(Listed::new(appended));
        prop_assert_eq!(def.dependency_set().as_slice(), expected.as_slice());
    }

    /// PROPERTY: Repeated reads return the same set and run the hook once.
    #[test]
    fn property_hook_runs_once(
        appended in descriptors(),
        reads in 1usize..10,
    ) {
        let kind = Listed::new(appended);
        let calls = kind.calls();
        let def = named("ns:x").build_with(kind);

        let first = def.dependency_set().clone();
        for _ in 0..reads {
            prop_assert_eq!(def.dependency_set(), &first);
        }
        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
