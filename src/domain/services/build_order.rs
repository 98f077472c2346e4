//! Build order - dependencies before dependents
//!
//! Orders a batch of definitions so that every definition comes after the
//! definitions in its dependency set. Edges are matched by qualified name;
//! dependencies that are not part of the batch are ignored.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::Definition;
use crate::error::{MarkdefError, MarkdefResult};

/// Topologically sort `definitions`
///
/// Among definitions that are ready at the same time, input order is kept,
/// so the result is deterministic. Anonymous definitions have no edges and
/// keep their relative position.
pub fn build_order(definitions: &[Arc<Definition>]) -> MarkdefResult<Vec<&Arc<Definition>>> {
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();
    for (index, definition) in definitions.iter().enumerate() {
        if let Some(name) = definition.name() {
            if index_by_name.contains_key(name) {
                warn!(definition = name, "duplicate definition name, keeping the first");
                continue;
            }
            index_by_name.insert(name, index);
        }
    }

    // dependents[i] lists the definitions that depend on i
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); definitions.len()];
    let mut pending: Vec<usize> = vec![0; definitions.len()];

    for (index, definition) in definitions.iter().enumerate() {
        for descriptor in definition.dependency_set() {
            let Some(&dep) = index_by_name.get(descriptor.qualified_name().as_str()) else {
                continue;
            };
            if dep == index {
                continue;
            }
            dependents[dep].push(index);
            pending[index] += 1;
        }
    }

    let mut ready: BTreeSet<usize> = pending
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == 0)
        .map(|(index, _)| index)
        .collect();
    let mut order = Vec::with_capacity(definitions.len());

    while let Some(index) = ready.pop_first() {
        order.push(&definitions[index]);
        for &dependent in &dependents[index] {
            pending[dependent] -= 1;
            if pending[dependent] == 0 {
                ready.insert(dependent);
            }
        }
    }

    if order.len() != definitions.len() {
        let mut members: Vec<String> = pending
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(index, _)| definitions[index].to_string())
            .collect();
        members.sort();
        return Err(MarkdefError::DependencyCycle { members });
    }

    Ok(order)
}
