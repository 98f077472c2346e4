//! ManifestRepository port - abstraction for manifest persistence
//!
//! This trait allows the domain layer to load/save build manifests
//! without knowing about TOML serialization details.

use std::path::Path;

use crate::domain::entities::BuildManifest;
use crate::error::MarkdefResult;

/// Abstract repository for build manifest persistence
pub trait ManifestRepository {
    /// Load manifest from path; a missing file yields an empty manifest
    fn load(&self, path: &Path) -> MarkdefResult<BuildManifest>;

    /// Load manifest from path, or create empty on any error
    fn load_or_new(&self, path: &Path) -> BuildManifest {
        self.load(path).unwrap_or_default()
    }

    /// Save manifest to path
    fn save(&self, manifest: &BuildManifest, path: &Path) -> MarkdefResult<()>;
}
