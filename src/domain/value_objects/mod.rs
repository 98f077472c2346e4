//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod access;
mod descriptor;
mod hash;
mod location;

pub use access::DefinitionAccess;
pub use descriptor::{Descriptor, DescriptorKind};
pub use hash::{ContentHash, HashHandle};
pub use location::Location;
