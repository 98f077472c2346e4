//! Repository implementations

mod manifest;

pub use manifest::{parse_manifest, TomlManifestRepository};
