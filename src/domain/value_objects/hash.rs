//! Content Hash Value Object
//!
//! A validated, immutable hash representing the source bytes of a definition,
//! plus the set-once handle the hash provider hands to a builder before the
//! digest is known.

use std::fmt;
use std::io::{self, Read};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Create a new ContentHash from a raw hash string (with or without prefix)
    pub fn new(raw_hash: &str) -> Self {
        if raw_hash.starts_with(Self::PREFIX) {
            Self(raw_hash.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw_hash))
        }
    }

    /// Create a ContentHash by computing SHA-256 of some bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_digest(Sha256::digest(bytes).as_slice())
    }

    /// Create a ContentHash by computing SHA-256 of text content
    pub fn from_content(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    fn from_digest(digest: &[u8]) -> Self {
        let mut hex = String::with_capacity(Self::PREFIX.len() + digest.len() * 2);
        hex.push_str(Self::PREFIX);
        for byte in digest {
            hex.push_str(&format!("{:02x}", byte));
        }
        Self(hex)
    }

    /// Get the full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Check if this hash matches a raw string (with or without prefix)
    pub fn matches_str(&self, s: &str) -> bool {
        if s.starts_with(Self::PREFIX) {
            self.0 == s
        } else {
            self.hex() == s
        }
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentHash {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<ContentHash> for String {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Handle to a digest that may not have been computed yet
///
/// The hash provider creates a handle, gives a clone to the builder, and
/// populates it once the source has been read. Clones share the same cell,
/// so a digest set through any clone is visible through all of them. The
/// digest can be set at most once.
#[derive(Debug, Clone, Default)]
pub struct HashHandle {
    cell: Arc<OnceLock<ContentHash>>,
}

impl HashHandle {
    /// Create an unset handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle that is already populated
    pub fn with_hash(hash: ContentHash) -> Self {
        let handle = Self::new();
        handle.set(hash);
        handle
    }

    /// True once a digest has been stored
    pub fn is_set(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Store a digest. Returns false if the handle was already populated.
    pub fn set(&self, hash: ContentHash) -> bool {
        self.cell.set(hash).is_ok()
    }

    /// Digest the given bytes into this handle
    pub fn set_from_bytes(&self, bytes: &[u8]) -> bool {
        self.set(ContentHash::from_bytes(bytes))
    }

    /// Stream a reader through SHA-256 and store the digest
    ///
    /// Returns the number of bytes read. If the handle was already set, the
    /// reader is still drained but the stored digest is kept.
    pub fn compute_from_reader<R: Read>(&self, mut reader: R) -> io::Result<u64> {
        let mut hasher = Sha256::new();
        let mut buf = [0u8; 8192];
        let mut total = 0u64;
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
            total += n as u64;
        }
        self.set(ContentHash::from_digest(hasher.finalize().as_slice()));
        Ok(total)
    }

    /// The digest, if set
    pub fn get(&self) -> Option<&ContentHash> {
        self.cell.get()
    }

    /// The formatted digest, if set
    pub fn formatted(&self) -> Option<String> {
        self.get().map(ContentHash::to_string)
    }
}
