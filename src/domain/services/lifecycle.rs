//! Lifecycle driver - takes definitions from constructed to valid
//!
//! Each definition goes through `validate_definition`, then
//! `validate_references`, then `mark_valid`. Failures are collected per
//! definition; whether the driver keeps going after one is a caller choice.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::entities::Definition;
use crate::domain::ports::ReferenceValidationContext;
use crate::error::MarkdefError;

/// Options for [`validate_all`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleOptions {
    /// Keep validating the remaining definitions after a failure
    pub continue_on_error: bool,
    /// Mark definitions that pass both phases as valid
    pub mark_valid: bool,
}

impl Default for LifecycleOptions {
    fn default() -> Self {
        Self {
            continue_on_error: true,
            mark_valid: true,
        }
    }
}

/// Phase a definition failed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    Definition,
    References,
}

/// One failed definition
#[derive(Debug, Serialize)]
pub struct LifecycleFailure {
    pub definition: String,
    pub phase: LifecyclePhase,
    pub message: String,
    #[serde(skip)]
    pub error: MarkdefError,
}

/// Outcome of a [`validate_all`] run
#[derive(Debug, Default, Serialize)]
pub struct LifecycleReport {
    /// Definitions that passed both phases (or were already valid)
    pub valid: Vec<String>,
    pub failures: Vec<LifecycleFailure>,
    /// Definitions never looked at because the run stopped early
    pub not_attempted: Vec<String>,
}

impl LifecycleReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.not_attempted.is_empty()
    }

    /// Machine-readable report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Run both validation phases on one definition, marking it valid on success
pub fn validate_one(
    definition: &Definition,
    context: &dyn ReferenceValidationContext,
    mark_valid: bool,
) -> Result<(), LifecycleFailure> {
    if let Err(err) = definition.validate_definition() {
        return Err(LifecycleFailure {
            definition: definition.to_string(),
            phase: LifecyclePhase::Definition,
            message: err.to_string(),
            error: err.into(),
        });
    }
    if let Err(err) = definition.validate_references(context) {
        return Err(LifecycleFailure {
            definition: definition.to_string(),
            phase: LifecyclePhase::References,
            message: err.to_string(),
            error: err.into(),
        });
    }
    if mark_valid {
        definition.mark_valid();
    }
    Ok(())
}

/// Drive every definition through the lifecycle
///
/// Definitions that are already valid are not validated again.
pub fn validate_all(
    definitions: &[Arc<Definition>],
    context: &dyn ReferenceValidationContext,
    options: &LifecycleOptions,
) -> LifecycleReport {
    let mut report = LifecycleReport::default();

    for (index, definition) in definitions.iter().enumerate() {
        if definition.is_valid() {
            debug!(definition = %definition, "already valid");
            report.valid.push(definition.to_string());
            continue;
        }

        match validate_one(definition, context, options.mark_valid) {
            Ok(()) => {
                debug!(definition = %definition, "definition validated");
                report.valid.push(definition.to_string());
            }
            Err(failure) => {
                warn!(
                    definition = %failure.definition,
                    phase = ?failure.phase,
                    "validation failed: {}",
                    failure.message
                );
                report.failures.push(failure);
                if !options.continue_on_error {
                    report.not_attempted = definitions[index + 1..]
                        .iter()
                        .map(|d| d.to_string())
                        .collect();
                    break;
                }
            }
        }
    }

    report
}
