//! ReferenceValidationContext port - resolution during reference checks
//!
//! Definitions never resolve descriptors themselves. Whatever drives
//! validation supplies a context that can look a descriptor up and decide
//! whether a reference is allowed.

use crate::domain::entities::Definition;
use crate::domain::value_objects::{DefinitionAccess, Descriptor, DescriptorKind};
use crate::error::ReferenceError;

/// What the context knows about a resolved descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedReference {
    /// Kind the target was registered as
    pub kind: DescriptorKind,
    /// Access level the target declares
    pub access: DefinitionAccess,
}

/// Resolution and access policy used by `Definition::validate_references`
pub trait ReferenceValidationContext {
    /// Look up the definition a descriptor points at
    fn lookup(&self, descriptor: &Descriptor) -> Option<ResolvedReference>;

    /// Decide whether `referencing` may refer to `target`
    ///
    /// The default rule: `Private` targets are only visible to themselves,
    /// `Internal` targets to definitions in the same namespace, and `Public`
    /// or `Global` targets to everyone.
    fn check_access(
        &self,
        referencing: &Definition,
        target: &Descriptor,
        access: DefinitionAccess,
    ) -> Result<(), ReferenceError> {
        if default_access_allows(referencing.name(), target, access) {
            Ok(())
        } else {
            Err(ReferenceError::AccessDenied {
                referencing: referencing.to_string(),
                target: target.clone(),
                access,
            })
        }
    }
}

/// The default visibility rule, usable by custom contexts
pub fn default_access_allows(
    referencing: Option<&str>,
    target: &Descriptor,
    access: DefinitionAccess,
) -> bool {
    match access {
        DefinitionAccess::Public | DefinitionAccess::Global => true,
        DefinitionAccess::Private => referencing == Some(target.qualified_name().as_str()),
        DefinitionAccess::Internal => referencing
            .and_then(|name| name.split_once(Descriptor::SEPARATOR))
            .is_some_and(|(namespace, _)| namespace == target.namespace()),
    }
}
