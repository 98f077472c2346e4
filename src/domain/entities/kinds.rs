//! Concrete definition kinds
//!
//! - [`Element`]: no references at all
//! - [`ComponentKind`]: a component (or application) with a parent,
//!   implemented interfaces and included resources
//! - [`InterfaceKind`]: an interface extending other interfaces

use crate::domain::entities::definition::{Definition, DefinitionKind};
use crate::domain::entities::dependency_set::DependencyCollector;
use crate::domain::ports::{ReferenceValidationContext, ResolvedReference};
use crate::domain::value_objects::{Descriptor, DescriptorKind};
use crate::error::ReferenceError;

/// Kind without dependencies or reference checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Element;

impl DefinitionKind for Element {
    fn label(&self) -> &'static str {
        "element"
    }
}

/// Resolve a reference and apply the context's access rule
fn resolve(
    owner: &Definition,
    context: &dyn ReferenceValidationContext,
    target: &Descriptor,
) -> Result<ResolvedReference, ReferenceError> {
    let resolved = context
        .lookup(target)
        .ok_or_else(|| ReferenceError::Unresolved {
            referencing: owner.to_string(),
            target: target.clone(),
        })?;
    context.check_access(owner, target, resolved.access)?;
    Ok(resolved)
}

fn expect_kind(
    owner: &Definition,
    target: &Descriptor,
    resolved: &ResolvedReference,
    allowed: &[DescriptorKind],
    expected: &str,
) -> Result<(), ReferenceError> {
    if allowed.contains(&resolved.kind) {
        Ok(())
    } else {
        Err(ReferenceError::InvalidKind {
            referencing: owner.to_string(),
            target: target.clone(),
            expected: expected.to_string(),
            found: resolved.kind,
        })
    }
}

/// A component or application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentKind {
    extends: Option<Descriptor>,
    implements: Vec<Descriptor>,
    includes: Vec<Descriptor>,
}

impl ComponentKind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the parent component
    pub fn with_extends(mut self, parent: Descriptor) -> Self {
        self.extends = Some(parent);
        self
    }

    /// Builder: add an implemented interface
    pub fn with_interface(mut self, interface: Descriptor) -> Self {
        self.implements.push(interface);
        self
    }

    /// Builder: add an included resource (library, event, ...)
    pub fn with_include(mut self, include: Descriptor) -> Self {
        self.includes.push(include);
        self
    }

    pub fn extends(&self) -> Option<&Descriptor> {
        self.extends.as_ref()
    }

    pub fn implements(&self) -> &[Descriptor] {
        &self.implements
    }

    pub fn includes(&self) -> &[Descriptor] {
        &self.includes
    }
}

impl DefinitionKind for ComponentKind {
    fn label(&self) -> &'static str {
        "component"
    }

    fn append_dependencies(&self, dependencies: &mut DependencyCollector) {
        dependencies.extend(self.extends.iter().cloned());
        dependencies.extend(self.implements.iter().cloned());
        dependencies.extend(self.includes.iter().cloned());
    }

    fn validate_references(
        &self,
        owner: &Definition,
        context: &dyn ReferenceValidationContext,
    ) -> Result<(), ReferenceError> {
        if let Some(parent) = &self.extends {
            if owner.name() == Some(parent.qualified_name().as_str()) {
                return Err(ReferenceError::SelfReference {
                    target: parent.clone(),
                });
            }
            let resolved = resolve(owner, context, parent)?;
            expect_kind(
                owner,
                parent,
                &resolved,
                &[DescriptorKind::Component, DescriptorKind::Application],
                "a component",
            )?;
        }

        for interface in &self.implements {
            let resolved = resolve(owner, context, interface)?;
            expect_kind(
                owner,
                interface,
                &resolved,
                &[DescriptorKind::Interface],
                "an interface",
            )?;
        }

        for include in &self.includes {
            resolve(owner, context, include)?;
        }

        Ok(())
    }
}

/// An interface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceKind {
    extends: Vec<Descriptor>,
}

impl InterfaceKind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a super-interface
    pub fn with_extends(mut self, parent: Descriptor) -> Self {
        self.extends.push(parent);
        self
    }

    pub fn extends(&self) -> &[Descriptor] {
        &self.extends
    }
}

impl DefinitionKind for InterfaceKind {
    fn label(&self) -> &'static str {
        "interface"
    }

    fn append_dependencies(&self, dependencies: &mut DependencyCollector) {
        dependencies.extend(self.extends.iter().cloned());
    }

    fn validate_references(
        &self,
        owner: &Definition,
        context: &dyn ReferenceValidationContext,
    ) -> Result<(), ReferenceError> {
        for parent in &self.extends {
            if owner.name() == Some(parent.qualified_name().as_str()) {
                return Err(ReferenceError::SelfReference {
                    target: parent.clone(),
                });
            }
            let resolved = resolve(owner, context, parent)?;
            expect_kind(
                owner,
                parent,
                &resolved,
                &[DescriptorKind::Interface],
                "an interface",
            )?;
        }
        Ok(())
    }
}
