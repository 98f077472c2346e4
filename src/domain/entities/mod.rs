//! Domain Entities
//!
//! - `DefinitionBuilder` - mutable accumulator filled in while parsing
//! - `Definition` - immutable result of a build
//! - `DependencySet` - memoized, ordered dependencies of a definition
//! - `BuildManifest` - cache keys recorded by a build

mod builder;
mod definition;
mod dependency_set;
mod kinds;
mod manifest;

pub use builder::DefinitionBuilder;
pub use definition::{Definition, DefinitionKind};
pub use dependency_set::{DependencyCollector, DependencySet};
pub use kinds::{ComponentKind, Element, InterfaceKind};
pub use manifest::{BuildManifest, ManifestEntry};
