//! Error types for markdef
//!
//! Uses `thiserror` for all library errors. Two kinds matter to the
//! definition lifecycle:
//!
//! - [`StructuralError`] is captured while a definition is being built and
//!   only surfaced by `Definition::validate_definition`.
//! - [`ReferenceError`] is raised directly by `Definition::validate_references`.

use std::error::Error as StdError;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::value_objects::{DefinitionAccess, Descriptor, DescriptorKind, Location};

/// Result type alias for markdef operations
pub type MarkdefResult<T> = Result<T, MarkdefError>;

/// A foreign error shared between every raise of a stored structural error
pub type SharedCause = Arc<dyn StdError + Send + Sync + 'static>;

fn at(location: &Option<Location>) -> String {
    match location {
        Some(loc) => format!(" at {}", loc),
        None => String::new(),
    }
}

fn kind_of(target: &Descriptor) -> DescriptorKind {
    target.kind()
}

/// The source could not be turned into a well-formed definition
///
/// Cloning is cheap and keeps the original cause: every clone points at the
/// same underlying error.
#[derive(Error, Debug, Clone)]
pub enum StructuralError {
    /// Generic wrapper around a parse failure that was not itself structural
    #[error("invalid definition{}: {message}", at(.location))]
    InvalidDefinition {
        message: String,
        location: Option<Location>,
        #[source]
        cause: Option<SharedCause>,
    },

    /// A required attribute was not present in the markup
    #[error("missing required attribute '{attribute}'{}", at(.location))]
    MissingAttribute {
        attribute: String,
        location: Option<Location>,
    },

    /// The markup used a construct this definition kind does not allow
    #[error("{what} is not supported{}", at(.location))]
    Unsupported {
        what: String,
        location: Option<Location>,
    },
}

impl StructuralError {
    /// Create an `InvalidDefinition` without a cause
    pub fn invalid(message: impl Into<String>, location: Option<Location>) -> Self {
        StructuralError::InvalidDefinition {
            message: message.into(),
            location,
            cause: None,
        }
    }

    /// Where the problem was found, if known
    pub fn location(&self) -> Option<&Location> {
        match self {
            StructuralError::InvalidDefinition { location, .. }
            | StructuralError::MissingAttribute { location, .. }
            | StructuralError::Unsupported { location, .. } => location.as_ref(),
        }
    }

    /// The wrapped cause, for `InvalidDefinition` built from a foreign error
    pub fn cause(&self) -> Option<&SharedCause> {
        match self {
            StructuralError::InvalidDefinition { cause, .. } => cause.as_ref(),
            _ => None,
        }
    }
}

/// A diagnostic raised by a parser collaborator that knows where it happened
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LocatedError {
    pub message: String,
    pub location: Option<Location>,
}

impl LocatedError {
    pub fn new(message: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// Anything handed to `DefinitionBuilder::set_parse_error`
///
/// Structural errors are stored as they are. Every other cause is wrapped
/// into [`StructuralError::InvalidDefinition`], keeping its message and the
/// location it reported.
#[derive(Debug)]
pub enum ParseCause {
    Structural(StructuralError),
    Foreign {
        message: String,
        location: Option<Location>,
        error: SharedCause,
    },
}

impl ParseCause {
    /// Wrap an arbitrary error that carries no location
    pub fn foreign<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ParseCause::Foreign {
            message: error.to_string(),
            location: None,
            error: Arc::new(error),
        }
    }

    /// Wrap an arbitrary error together with the location it reported
    pub fn foreign_at<E>(error: E, location: Location) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ParseCause::Foreign {
            message: error.to_string(),
            location: Some(location),
            error: Arc::new(error),
        }
    }

    /// Convert into the error stored on the definition
    pub fn into_structural(self) -> StructuralError {
        match self {
            ParseCause::Structural(err) => err,
            ParseCause::Foreign {
                message,
                location,
                error,
            } => StructuralError::InvalidDefinition {
                message,
                location,
                cause: Some(error),
            },
        }
    }
}

impl From<StructuralError> for ParseCause {
    fn from(err: StructuralError) -> Self {
        ParseCause::Structural(err)
    }
}

impl From<LocatedError> for ParseCause {
    fn from(err: LocatedError) -> Self {
        let location = err.location.clone();
        ParseCause::Foreign {
            message: err.message.clone(),
            location,
            error: Arc::new(err),
        }
    }
}

impl From<std::io::Error> for ParseCause {
    fn from(err: std::io::Error) -> Self {
        ParseCause::foreign(err)
    }
}

/// A reference from one definition to another could not be honoured
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// The referenced descriptor does not resolve to a definition
    #[error("{referencing}: no {} definition found for '{target}'", kind_of(.target))]
    Unresolved {
        referencing: String,
        target: Descriptor,
    },

    /// The referenced definition is not visible from the referencing one
    #[error("{referencing}: access to {access} definition '{target}' is not allowed")]
    AccessDenied {
        referencing: String,
        target: Descriptor,
        access: DefinitionAccess,
    },

    /// The referenced definition exists but is of the wrong kind
    #[error("{referencing}: '{target}' must be {expected} but is {found}")]
    InvalidKind {
        referencing: String,
        target: Descriptor,
        expected: String,
        found: DescriptorKind,
    },

    /// A definition lists itself as a dependency
    #[error("'{target}' cannot reference itself")]
    SelfReference { target: Descriptor },
}

impl ReferenceError {
    /// The descriptor the failing reference pointed at
    pub fn target(&self) -> &Descriptor {
        match self {
            ReferenceError::Unresolved { target, .. }
            | ReferenceError::AccessDenied { target, .. }
            | ReferenceError::InvalidKind { target, .. }
            | ReferenceError::SelfReference { target } => target,
        }
    }
}

/// Main error type for markdef operations
#[derive(Error, Debug)]
pub enum MarkdefError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Manifest file could not be parsed or written
    #[error("invalid manifest in {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Manifest was written by an incompatible version
    #[error("manifest version {found} is not supported (expected {expected})")]
    ManifestVersionMismatch { found: u32, expected: u32 },

    /// Definitions depend on each other in a loop
    #[error("dependency cycle between: {}", .members.join(", "))]
    DependencyCycle { members: Vec<String> },
}
