//! Domain Layer
//!
//! The definition lifecycle without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Definition, its builder, dependency sets, build manifest
//! - `value_objects/` - Location, ContentHash, Descriptor, DefinitionAccess
//! - `services/` - Lifecycle driver, build ordering, cache keys
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Build never fails** - parse errors are captured, surfaced on validation
//! 3. **Ports & Adapters** - Resolution and persistence go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
