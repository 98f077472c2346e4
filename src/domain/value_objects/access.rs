//! Definition access value object - visibility of a definition
//!
//! - `Private`: only the definition itself
//! - `Internal`: definitions in the same namespace
//! - `Public`: any definition (default)
//! - `Global`: any definition, including outside the owning application

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visibility of a definition to other definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionAccess {
    Private,
    Internal,
    #[default]
    Public,
    Global,
}

impl DefinitionAccess {
    /// True for `Public` and `Global`
    pub fn is_open(&self) -> bool {
        matches!(self, DefinitionAccess::Public | DefinitionAccess::Global)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DefinitionAccess::Private => "private",
            DefinitionAccess::Internal => "internal",
            DefinitionAccess::Public => "public",
            DefinitionAccess::Global => "global",
        }
    }
}

impl fmt::Display for DefinitionAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefinitionAccess {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "private" => Ok(DefinitionAccess::Private),
            "internal" => Ok(DefinitionAccess::Internal),
            "public" => Ok(DefinitionAccess::Public),
            "global" => Ok(DefinitionAccess::Global),
            other => Err(format!("unknown access level '{}'", other)),
        }
    }
}
