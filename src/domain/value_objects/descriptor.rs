//! Descriptor value object - a reference to another definition
//!
//! Descriptors are the edges of the dependency graph. They identify a
//! definition by kind and qualified name (`namespace:name`) without holding
//! the definition itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of definition a descriptor points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorKind {
    Component,
    Interface,
    Application,
    Event,
    Library,
}

impl DescriptorKind {
    pub const ALL: [DescriptorKind; 5] = [
        DescriptorKind::Component,
        DescriptorKind::Interface,
        DescriptorKind::Application,
        DescriptorKind::Event,
        DescriptorKind::Library,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptorKind::Component => "component",
            DescriptorKind::Interface => "interface",
            DescriptorKind::Application => "application",
            DescriptorKind::Event => "event",
            DescriptorKind::Library => "library",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a definition by kind and qualified name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Descriptor {
    kind: DescriptorKind,
    namespace: String,
    name: String,
}

impl Descriptor {
    /// Separator between namespace and name in a qualified name
    pub const SEPARATOR: char = ':';

    /// Build a descriptor from its parts
    ///
    /// Neither part may contain [`Self::SEPARATOR`], otherwise two
    /// different descriptors would share a qualified name. Use
    /// [`Descriptor::parse`] for untrusted input.
    pub fn new(kind: DescriptorKind, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        debug_assert!(
            !namespace.contains(Self::SEPARATOR) && !name.contains(Self::SEPARATOR),
            "descriptor parts must not contain '{}': {namespace:?}, {name:?}",
            Self::SEPARATOR
        );
        Self {
            kind,
            namespace,
            name,
        }
    }

    /// Parse a qualified name of the form `namespace:name`
    ///
    /// Returns `None` when either side is empty or the separator is missing.
    pub fn parse(kind: DescriptorKind, qualified_name: &str) -> Option<Self> {
        let (namespace, name) = qualified_name.trim().split_once(Self::SEPARATOR)?;
        if namespace.is_empty() || name.is_empty() || name.contains(Self::SEPARATOR) {
            return None;
        }
        Some(Self::new(kind, namespace, name))
    }

    pub fn kind(&self) -> DescriptorKind {
        self.kind
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `namespace:name`
    pub fn qualified_name(&self) -> String {
        format!("{}{}{}", self.namespace, Self::SEPARATOR, self.name)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, Self::SEPARATOR, self.name)
    }
}
