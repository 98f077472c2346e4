//! Definition entity - the immutable result of parsing one markup source
//!
//! A definition carries identity (qualified name), provenance (location,
//! own hash) and documentation, plus a structural error captured while it
//! was being built. Behaviour that differs per kind of definition
//! (component, interface, ...) lives behind [`DefinitionKind`].
//!
//! ## Lifecycle
//!
//! ```text
//! Constructed --validate_definition--> (may fail, state unchanged)
//!             --validate_references--> (may fail)
//!             --mark_valid-----------> Valid
//! ```
//!
//! Nothing enforces that the validation calls happen before `mark_valid`;
//! the caller driving the lifecycle is responsible for the ordering.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use tracing::trace;

use crate::domain::entities::dependency_set::{DependencyCollector, DependencySet};
use crate::domain::ports::ReferenceValidationContext;
use crate::domain::value_objects::{DefinitionAccess, Location};
use crate::error::{ReferenceError, StructuralError};

/// Per-kind behaviour of a definition
///
/// Both hooks default to doing nothing: a kind without references has no
/// dependencies and nothing to check.
pub trait DefinitionKind: fmt::Debug + Send + Sync {
    /// Short label used in diagnostics
    fn label(&self) -> &'static str;

    /// Append every descriptor this definition references
    ///
    /// Must only append to `dependencies`. Appending the same descriptor
    /// twice is harmless; the collector keeps the first occurrence.
    fn append_dependencies(&self, _dependencies: &mut DependencyCollector) {}

    /// Check that every reference resolves and is allowed
    fn validate_references(
        &self,
        _owner: &Definition,
        _context: &dyn ReferenceValidationContext,
    ) -> Result<(), ReferenceError> {
        Ok(())
    }
}

/// Fields a builder hands over to a new definition
#[derive(Debug, Default)]
pub(crate) struct DefinitionParts {
    pub qualified_name: Option<String>,
    pub location: Option<Location>,
    pub api_version: Option<String>,
    pub description: Option<String>,
    pub access: DefinitionAccess,
    pub own_hash: Option<String>,
    pub parse_error: Option<StructuralError>,
}

/// An immutable definition
///
/// Safe to share between threads (`Arc<Definition>`). The dependency set is
/// computed on first request; concurrent first requests block on a
/// [`OnceLock`] so the dependency hook runs exactly once and every caller
/// observes the same set.
#[derive(Debug)]
pub struct Definition {
    qualified_name: Option<String>,
    location: Option<Location>,
    api_version: Option<String>,
    description: Option<String>,
    access: DefinitionAccess,
    own_hash: String,
    parse_error: Option<StructuralError>,
    kind: Box<dyn DefinitionKind>,
    dependency_set: OnceLock<DependencySet>,
    valid: AtomicBool,
}

impl Definition {
    pub(crate) fn from_parts(parts: DefinitionParts, kind: Box<dyn DefinitionKind>) -> Self {
        Self {
            qualified_name: parts.qualified_name,
            location: parts.location,
            api_version: parts.api_version,
            description: parts.description,
            access: parts.access,
            own_hash: parts.own_hash.unwrap_or_default(),
            parse_error: parts.parse_error,
            kind,
            dependency_set: OnceLock::new(),
            valid: AtomicBool::new(false),
        }
    }

    /// A definition with nothing but a location
    ///
    /// Used for synthetic definitions that were never parsed from markup.
    pub fn synthetic(location: Option<Location>, kind: impl DefinitionKind + 'static) -> Self {
        Self::from_parts(
            DefinitionParts {
                location,
                ..DefinitionParts::default()
            },
            Box::new(kind),
        )
    }

    // --- Getters ---

    /// Qualified name (`namespace:name`), absent for anonymous definitions
    pub fn name(&self) -> Option<&str> {
        self.qualified_name.as_deref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn access(&self) -> DefinitionAccess {
        self.access
    }

    /// Content hash of the source; empty when no hash was computed
    pub fn own_hash(&self) -> &str {
        &self.own_hash
    }

    pub fn kind(&self) -> &dyn DefinitionKind {
        self.kind.as_ref()
    }

    /// True if a structural error was captured at build time
    pub fn has_parse_error(&self) -> bool {
        self.parse_error.is_some()
    }

    // --- Dependencies ---

    /// Append this definition's dependencies to a caller-owned collector
    pub fn append_dependencies(&self, dependencies: &mut DependencyCollector) {
        self.kind.append_dependencies(dependencies);
    }

    /// The memoized dependency set
    ///
    /// Computed on the first call and returned unchanged (same instance)
    /// on every later call.
    pub fn dependency_set(&self) -> &DependencySet {
        self.dependency_set.get_or_init(|| {
            let mut collector = DependencyCollector::new();
            self.kind.append_dependencies(&mut collector);
            trace!(definition = %self, count = collector.len(), "computed dependency set");
            collector.freeze()
        })
    }

    // --- Validation ---

    /// Surface the structural error captured at build time, if any
    ///
    /// Repeatable: every call returns the same error.
    pub fn validate_definition(&self) -> Result<(), StructuralError> {
        match &self.parse_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Check references against the given context
    pub fn validate_references(
        &self,
        context: &dyn ReferenceValidationContext,
    ) -> Result<(), ReferenceError> {
        self.kind.validate_references(self, context)
    }

    pub fn mark_valid(&self) {
        self.valid.store(true, Ordering::Release);
    }

    pub fn is_valid(&self) -> bool {
        self.valid.load(Ordering::Acquire)
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.qualified_name {
            return f.write_str(name);
        }
        let location = self
            .location
            .as_ref()
            .map(Location::to_string)
            .unwrap_or_else(|| "<unknown location>".to_string());
        write!(
            f,
            "INVALID[{}]: {}",
            location,
            self.description.as_deref().unwrap_or("<no description>")
        )
    }
}
