//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `registry` - In-memory reference validation context
//! - `repositories/` - Manifest persistence (TOML)

pub mod registry;
pub mod repositories;

pub use registry::InMemoryRegistry;
pub use repositories::TomlManifestRepository;
