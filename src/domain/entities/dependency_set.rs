//! Dependency sets - the descriptors a definition references
//!
//! A [`DependencyCollector`] is handed to `DefinitionKind::append_dependencies`
//! and records descriptors in the order they are appended, dropping
//! duplicates. Freezing it yields an immutable [`DependencySet`].

use std::collections::HashSet;

use crate::domain::value_objects::Descriptor;

/// Ordered, duplicate-free accumulator of descriptors
#[derive(Debug, Default)]
pub struct DependencyCollector {
    order: Vec<Descriptor>,
    seen: HashSet<Descriptor>,
}

impl DependencyCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor. Returns false if it was already present.
    pub fn append(&mut self, descriptor: Descriptor) -> bool {
        if self.seen.contains(&descriptor) {
            return false;
        }
        self.seen.insert(descriptor.clone());
        self.order.push(descriptor);
        true
    }

    /// Append several descriptors, keeping the first occurrence of each
    pub fn extend<I>(&mut self, descriptors: I)
    where
        I: IntoIterator<Item = Descriptor>,
    {
        for descriptor in descriptors {
            self.append(descriptor);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Stop collecting and produce the immutable set
    pub fn freeze(self) -> DependencySet {
        DependencySet {
            descriptors: self.order.into_boxed_slice(),
        }
    }
}

/// Immutable, insertion-ordered set of descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    descriptors: Box<[Descriptor]>,
}

impl DependencySet {
    /// An empty set
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn contains(&self, descriptor: &Descriptor) -> bool {
        self.descriptors.contains(descriptor)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.descriptors.iter()
    }

    pub fn as_slice(&self) -> &[Descriptor] {
        &self.descriptors
    }
}

impl<'a> IntoIterator for &'a DependencySet {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

impl FromIterator<Descriptor> for DependencySet {
    fn from_iter<I: IntoIterator<Item = Descriptor>>(iter: I) -> Self {
        let mut collector = DependencyCollector::new();
        collector.extend(iter);
        collector.freeze()
    }
}
