//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod manifest_repository;
pub mod validation_context;

pub use manifest_repository::ManifestRepository;
pub use validation_context::{default_access_allows, ReferenceValidationContext, ResolvedReference};
