//! markdef - definition lifecycle kernel for markup-based component frameworks
//!
//! A parser fills in a [`DefinitionBuilder`] while reading source markup,
//! records at most one deferred parse error, and builds an immutable
//! [`Definition`]. A definition then goes through structural validation,
//! reference validation against a [`ReferenceValidationContext`], and is
//! finally marked valid. Its dependency set is computed once, on demand.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::entities::{
    BuildManifest, ComponentKind, Definition, DefinitionBuilder, DefinitionKind,
    DependencyCollector, DependencySet, Element, InterfaceKind,
};
pub use domain::ports::{ManifestRepository, ReferenceValidationContext, ResolvedReference};
pub use domain::services::{
    build_manifest, build_order, cache_key, validate_all, LifecycleOptions, LifecycleReport,
};
pub use domain::value_objects::{
    ContentHash, DefinitionAccess, Descriptor, DescriptorKind, HashHandle, Location,
};
pub use error::{
    LocatedError, MarkdefError, MarkdefResult, ParseCause, ReferenceError, StructuralError,
};
pub use infrastructure::{InMemoryRegistry, TomlManifestRepository};
