//! Cache keys for incremental builds
//!
//! A definition's cache key digests its own hash together with the keys of
//! everything in its dependency set, in dependency-set order. Within a batch
//! the dependency keys are themselves cache keys, so a change deep in the
//! graph invalidates every definition above it.

use std::collections::HashMap;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::domain::entities::{BuildManifest, Definition, ManifestEntry};
use crate::domain::services::build_order::build_order;
use crate::domain::value_objects::{ContentHash, Descriptor};
use crate::error::MarkdefResult;

/// Cache key of one definition
///
/// `dependency_key` supplies the key (or own hash) of each dependency;
/// unknown dependencies contribute an empty key.
pub fn cache_key<F>(definition: &Definition, mut dependency_key: F) -> ContentHash
where
    F: FnMut(&Descriptor) -> Option<String>,
{
    let mut hasher = Sha256::new();
    hasher.update(b"own:");
    hasher.update(definition.own_hash().as_bytes());
    hasher.update(b"\n");
    for descriptor in definition.dependency_set() {
        let key = dependency_key(descriptor).unwrap_or_default();
        hasher.update(
            format!("{} {}={}\n", descriptor.kind(), descriptor, key).as_bytes(),
        );
    }
    ContentHash::new(&format!("{:x}", hasher.finalize()))
}

/// Compute cache keys for a batch and record them in a manifest
///
/// Definitions are processed in build order. Dependencies inside the batch
/// contribute their cache key; dependencies outside it are looked up with
/// `external_hash`. Anonymous definitions cannot be keyed and are skipped.
/// When several definitions share a name, the first in input order is
/// recorded, the same one [`build_order`] attaches edges to.
pub fn build_manifest<F>(
    definitions: &[Arc<Definition>],
    mut external_hash: F,
) -> MarkdefResult<BuildManifest>
where
    F: FnMut(&Descriptor) -> Option<String>,
{
    let mut manifest = BuildManifest::new();

    let mut first_by_name: HashMap<&str, &Arc<Definition>> = HashMap::new();
    for definition in definitions {
        if let Some(name) = definition.name() {
            first_by_name.entry(name).or_insert(definition);
        }
    }

    for definition in build_order(definitions)? {
        let Some(name) = definition.name() else {
            warn!(definition = %definition, "anonymous definition has no cache key");
            continue;
        };
        if !first_by_name
            .get(name)
            .is_some_and(|first| Arc::ptr_eq(first, definition))
        {
            warn!(definition = name, "duplicate definition name, keeping the first");
            continue;
        }

        let key = cache_key(definition, |descriptor| {
            manifest
                .get(&descriptor.qualified_name())
                .map(|entry| entry.cache_key().to_string())
                .or_else(|| external_hash(descriptor))
        });
        let dependencies = definition
            .dependency_set()
            .iter()
            .map(Descriptor::qualified_name)
            .collect();

        debug!(definition = name, cache_key = %key, "recorded cache key");
        manifest.set_entry(
            name,
            ManifestEntry::new(definition.own_hash(), dependencies, key),
        );
    }

    Ok(manifest)
}
