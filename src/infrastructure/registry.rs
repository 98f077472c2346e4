//! In-memory definition registry
//!
//! Maps qualified names to built definitions and serves as the
//! [`ReferenceValidationContext`] for reference checks. Lookups ignore the
//! descriptor kind so that a reference of the wrong kind resolves and can be
//! reported as such.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::Definition;
use crate::domain::ports::{ReferenceValidationContext, ResolvedReference};
use crate::domain::value_objects::Descriptor;

#[derive(Debug, Clone)]
struct Registered {
    descriptor: Descriptor,
    definition: Arc<Definition>,
}

/// Registry of definitions keyed by qualified name
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    definitions: HashMap<String, Registered>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under a descriptor
    ///
    /// Returns the definition previously registered under the same
    /// qualified name, if any.
    pub fn register(
        &mut self,
        descriptor: Descriptor,
        definition: Arc<Definition>,
    ) -> Option<Arc<Definition>> {
        debug!(descriptor = %descriptor, kind = %descriptor.kind(), "registering definition");
        self.definitions
            .insert(
                descriptor.qualified_name(),
                Registered {
                    descriptor,
                    definition,
                },
            )
            .map(|previous| previous.definition)
    }

    pub fn get(&self, descriptor: &Descriptor) -> Option<&Arc<Definition>> {
        self.definitions
            .get(&descriptor.qualified_name())
            .map(|r| &r.definition)
    }

    pub fn remove(&mut self, descriptor: &Descriptor) -> Option<Arc<Definition>> {
        self.definitions
            .remove(&descriptor.qualified_name())
            .map(|r| r.definition)
    }

    /// Own hash of the registered definition, if any
    pub fn own_hash(&self, descriptor: &Descriptor) -> Option<String> {
        self.get(descriptor).map(|d| d.own_hash().to_string())
    }

    /// All registered definitions, sorted by qualified name
    pub fn definitions(&self) -> Vec<Arc<Definition>> {
        let mut registered: Vec<(&String, &Registered)> = self.definitions.iter().collect();
        registered.sort_by(|(a, _), (b, _)| a.cmp(b));
        registered
            .into_iter()
            .map(|(_, r)| Arc::clone(&r.definition))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ReferenceValidationContext for InMemoryRegistry {
    fn lookup(&self, descriptor: &Descriptor) -> Option<ResolvedReference> {
        self.definitions
            .get(&descriptor.qualified_name())
            .map(|r| ResolvedReference {
                kind: r.descriptor.kind(),
                access: r.definition.access(),
            })
    }
}
