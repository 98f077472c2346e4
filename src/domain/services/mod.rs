//! Domain Services
//!
//! Pure logic that operates on batches of definitions.
//! These services have no I/O dependencies and are easily testable.

mod build_order;
mod incremental;
mod lifecycle;

pub use build_order::build_order;
pub use incremental::{build_manifest, cache_key};
pub use lifecycle::{
    validate_all, validate_one, LifecycleFailure, LifecycleOptions, LifecyclePhase,
    LifecycleReport,
};
