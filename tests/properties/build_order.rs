//! Property tests for build ordering.

use proptest::prelude::*;

use std::collections::HashMap;
use std::sync::Arc;

use crate::common::{cmp, component};
use markdef::{build_order, ComponentKind, Definition};

/// Acyclic graphs: definition `i` may only include definitions `j < i`
fn acyclic_graph() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..12).prop_flat_map(|n| {
        (0..n)
            .map(|i| {
                if i == 0 {
                    Just(Vec::new()).boxed()
                } else {
                    proptest::collection::vec(0..i, 0..4).boxed()
                }
            })
            .collect::<Vec<_>>()
    })
}

fn definitions(graph: &[Vec<usize>], reversed: bool) -> Vec<Arc<Definition>> {
    let mut defs: Vec<Arc<Definition>> = graph
        .iter()
        .enumerate()
        .map(|(i, deps)| {
            let kind = deps.iter().fold(ComponentKind::new(), |kind, j| {
                kind.with_include(cmp(&format!("ns:d{j}")))
            });
            component(&format!("ns:d{i}"), kind)
        })
        .collect();
    if reversed {
        defs.reverse();
    }
    defs
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every dependency inside the batch comes before its
    /// dependents, regardless of input order.
    #[test]
    fn property_dependencies_precede_dependents(
        graph in acyclic_graph(),
        reversed in any::<bool>(),
    ) {
        let defs = definitions(&graph, reversed);
        let order = build_order(&defs).unwrap();
        prop_assert_eq!(order.len(), graph.len());

        let position: HashMap<String, usize> = order
            .iter()
            .enumerate()
            .map(|(pos, d)| (d.to_string(), pos))
            .collect();
        for (i, deps) in graph.iter().enumerate() {
            for j in deps {
                prop_assert!(
                    position[&format!("ns:d{j}")] < position[&format!("ns:d{i}")],
                    "d{} must precede d{}", j, i
                );
            }
        }
    }
}
