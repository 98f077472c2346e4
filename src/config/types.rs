//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::LifecycleOptions;
use crate::error::MarkdefResult;

use super::loader::{self, ConfigWarning};

/// Lifecycle driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    #[serde(default = "default_true")]
    pub continue_on_error: bool,

    #[serde(default = "default_true")]
    pub mark_valid: bool,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            continue_on_error: true,
            mark_valid: true,
        }
    }
}

impl From<LifecycleConfig> for LifecycleOptions {
    fn from(config: LifecycleConfig) -> Self {
        Self {
            continue_on_error: config.continue_on_error,
            mark_valid: config.mark_valid,
        }
    }
}

/// Manifest configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_file")]
    pub file: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            file: default_manifest_file(),
        }
    }
}

fn default_manifest_file() -> String {
    "markdef.lock".to_string()
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lifecycle: LifecycleConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MarkdefResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MarkdefResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (MARKDEF_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Options for the lifecycle driver
    pub fn lifecycle_options(&self) -> LifecycleOptions {
        self.lifecycle.into()
    }

    /// Manifest location for a project
    pub fn manifest_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.manifest.file)
    }
}
