//! Definition builder - mutable accumulator filled in by the parser
//!
//! Setters can be called in any order and any number of times; the last
//! value wins. Two fields behave differently:
//!
//! - the parse error keeps the *first* cause it is given
//! - the own hash can come from a [`HashHandle`] that is only formatted
//!   once it reports itself set

use tracing::debug;

use crate::domain::entities::definition::{Definition, DefinitionKind, DefinitionParts};
use crate::domain::entities::kinds::Element;
use crate::domain::value_objects::{DefinitionAccess, HashHandle, Location};
use crate::error::{ParseCause, StructuralError};

/// Builder for a [`Definition`]
///
/// Single-owner and single-use: configure it, then call [`build`] or
/// [`build_with`] once.
///
/// [`build`]: DefinitionBuilder::build
/// [`build_with`]: DefinitionBuilder::build_with
#[derive(Debug, Default)]
pub struct DefinitionBuilder {
    fully_qualified_name: Option<String>,
    location: Option<Location>,
    api_version: Option<String>,
    description: Option<String>,
    access: Option<DefinitionAccess>,
    hash: Option<HashHandle>,
    own_hash: Option<String>,
    parse_error: Option<StructuralError>,
}

impl DefinitionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the qualified name (`namespace:name`) the definition will report
    pub fn set_fully_qualified_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.fully_qualified_name = Some(name.into());
        self
    }

    pub fn set_location(&mut self, location: Location) -> &mut Self {
        self.location = Some(location);
        self
    }

    /// Set a location pointing at a line and column
    pub fn set_location_at(
        &mut self,
        file: impl Into<String>,
        line: u32,
        column: u32,
        last_modified: i64,
    ) -> &mut Self {
        self.set_location(Location::new(file, line, column, last_modified))
    }

    /// Set a location covering a whole file
    pub fn set_file_location(&mut self, file: impl Into<String>, last_modified: i64) -> &mut Self {
        self.set_location(Location::for_file(file, last_modified))
    }

    pub fn set_api_version(&mut self, api_version: impl Into<String>) -> &mut Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_access(&mut self, access: DefinitionAccess) -> &mut Self {
        self.access = Some(access);
        self
    }

    /// Supply the hash handle the hash provider will populate
    ///
    /// A present handle discards any literal hash string set earlier, so the
    /// digest from the handle wins on the next read.
    pub fn set_own_hash_handle(&mut self, handle: Option<HashHandle>) -> &mut Self {
        if handle.is_some() {
            self.own_hash = None;
        }
        self.hash = handle;
        self
    }

    /// Set a literal hash string, bypassing the handle
    pub fn set_own_hash(&mut self, own_hash: impl Into<String>) -> &mut Self {
        self.own_hash = Some(own_hash.into());
        self
    }

    /// Record a parse failure; only the first one is kept
    pub fn set_parse_error(&mut self, cause: impl Into<ParseCause>) -> &mut Self {
        let cause = cause.into();
        if let Some(existing) = &self.parse_error {
            debug!(
                kept = %existing,
                dropped = ?cause,
                "parse error already recorded, ignoring later cause"
            );
            return self;
        }
        let err = cause.into_structural();
        debug!(error = %err, "captured parse error");
        self.parse_error = Some(err);
        self
    }

    // --- Getters ---

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn access(&self) -> Option<DefinitionAccess> {
        self.access
    }

    pub fn parse_error(&self) -> Option<&StructuralError> {
        self.parse_error.as_ref()
    }

    /// The own hash, formatting the handle's digest on first read
    ///
    /// Once formatted, the string is cached and later reads return it
    /// without consulting the handle again.
    pub fn own_hash(&mut self) -> Option<&str> {
        if self.own_hash.is_none() {
            if let Some(formatted) = self.hash.as_ref().and_then(HashHandle::formatted) {
                self.own_hash = Some(formatted);
            }
        }
        self.own_hash.as_deref()
    }

    // --- Build ---

    /// Build a plain [`Element`] definition
    pub fn build(self) -> Definition {
        self.build_with(Element)
    }

    /// Build a definition of the given kind
    ///
    /// Never fails: a recorded parse error travels with the definition and is
    /// surfaced by [`Definition::validate_definition`].
    pub fn build_with(mut self, kind: impl DefinitionKind + 'static) -> Definition {
        let own_hash = self.own_hash().map(str::to_string);
        let parts = DefinitionParts {
            qualified_name: self.fully_qualified_name,
            location: self.location,
            api_version: self.api_version,
            description: self.description,
            access: self.access.unwrap_or_default(),
            own_hash,
            parse_error: self.parse_error,
        };
        Definition::from_parts(parts, Box::new(kind))
    }
}
