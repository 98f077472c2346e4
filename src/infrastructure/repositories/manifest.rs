//! TOML Manifest Repository
//!
//! Implements the ManifestRepository port using TOML format.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{BuildManifest, ManifestEntry};
use crate::domain::ports::ManifestRepository;
use crate::domain::value_objects::ContentHash;
use crate::error::{MarkdefError, MarkdefResult};

/// TOML-based manifest repository
///
/// Stores the manifest as `markdef.lock` (or the configured file name).
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlManifestRepository;

impl TomlManifestRepository {
    pub fn new() -> Self {
        Self
    }

    /// Remove the manifest file if it exists
    pub fn delete(&self, path: &Path) -> MarkdefResult<()> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// TOML representation of one entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlEntry {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    own_hash: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<String>,
    cache_key: String,
}

/// TOML representation of the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlManifest {
    version: u32,
    #[serde(default)]
    definitions: BTreeMap<String, TomlEntry>,
}

/// Parse manifest text
///
/// Split out of [`ManifestRepository::load`] so it can be fuzzed without
/// touching the file system.
pub fn parse_manifest(content: &str, path: &Path) -> MarkdefResult<BuildManifest> {
    let parsed: TomlManifest = toml::from_str(content).map_err(|e| MarkdefError::InvalidManifest {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if parsed.version != BuildManifest::VERSION {
        return Err(MarkdefError::ManifestVersionMismatch {
            found: parsed.version,
            expected: BuildManifest::VERSION,
        });
    }

    let mut manifest = BuildManifest::new();
    for (name, entry) in parsed.definitions {
        manifest.set_entry(
            name,
            ManifestEntry::new(
                entry.own_hash,
                entry.dependencies,
                ContentHash::from(entry.cache_key),
            ),
        );
    }
    Ok(manifest)
}

impl ManifestRepository for TomlManifestRepository {
    fn load(&self, path: &Path) -> MarkdefResult<BuildManifest> {
        if !path.exists() {
            debug!(path = %path.display(), "no manifest, starting empty");
            return Ok(BuildManifest::new());
        }

        let content = fs::read_to_string(path)?;
        let manifest = parse_manifest(&content, path)?;
        debug!(path = %path.display(), entries = manifest.len(), "loaded manifest");
        Ok(manifest)
    }

    fn save(&self, manifest: &BuildManifest, path: &Path) -> MarkdefResult<()> {
        let definitions = manifest
            .entries()
            .map(|(name, entry)| {
                (
                    name.to_string(),
                    TomlEntry {
                        own_hash: entry.own_hash().to_string(),
                        dependencies: entry.dependencies().to_vec(),
                        cache_key: entry.cache_key().to_string(),
                    },
                )
            })
            .collect();

        let toml_manifest = TomlManifest {
            version: manifest.version(),
            definitions,
        };

        let content =
            toml::to_string_pretty(&toml_manifest).map_err(|e| MarkdefError::InvalidManifest {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        debug!(path = %path.display(), entries = manifest.len(), "saved manifest");
        Ok(())
    }
}
