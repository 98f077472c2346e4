//! Build manifest entity - cache keys from the last build
//!
//! The manifest records, per qualified name, the definition's own hash,
//! the names it depended on, and the cache key derived from both. Comparing
//! a fresh manifest against the previous one tells an incremental build
//! which definitions must be rebuilt. It's a pure data structure - I/O is
//! handled by `ManifestRepository`.

use std::collections::BTreeMap;

use crate::domain::value_objects::ContentHash;

/// Manifest entry for one definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    own_hash: String,
    dependencies: Vec<String>,
    cache_key: ContentHash,
}

impl ManifestEntry {
    pub fn new(own_hash: impl Into<String>, dependencies: Vec<String>, cache_key: ContentHash) -> Self {
        Self {
            own_hash: own_hash.into(),
            dependencies,
            cache_key,
        }
    }

    /// Own hash of the definition (may be empty)
    pub fn own_hash(&self) -> &str {
        &self.own_hash
    }

    /// Qualified names of the dependencies, in dependency-set order
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn cache_key(&self) -> &ContentHash {
        &self.cache_key
    }
}

/// Cache keys of every named definition in a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildManifest {
    version: u32,
    entries: BTreeMap<String, ManifestEntry>,
}

impl Default for BuildManifest {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildManifest {
    /// Current manifest format version
    pub const VERSION: u32 = 1;

    /// Create a new empty manifest
    pub fn new() -> Self {
        Self {
            version: Self::VERSION,
            entries: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.get(name)
    }

    pub fn set_entry(&mut self, name: impl Into<String>, entry: ManifestEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn remove(&mut self, name: &str) -> Option<ManifestEntry> {
        self.entries.remove(name)
    }

    /// Entries sorted by qualified name
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names whose cache key changed since `previous`, or that are new
    pub fn stale_against(&self, previous: &BuildManifest) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(name, entry)| {
                previous
                    .get(name)
                    .map_or(true, |old| old.cache_key != entry.cache_key)
            })
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Names present in `previous` but gone from this manifest
    pub fn removed_since<'a>(&self, previous: &'a BuildManifest) -> Vec<&'a str> {
        previous
            .entries
            .keys()
            .filter(|name| !self.entries.contains_key(*name))
            .map(String::as_str)
            .collect()
    }
}
