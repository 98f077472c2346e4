//! Configuration module for markdef
//!
//! Configuration hierarchy:
//! 1. Environment variables (MARKDEF_*) (highest priority)
//! 2. Project config (.markdef/config.toml)
//! 3. User config (<config_dir>/markdef/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, parse_with_warnings, ConfigWarning, PROJECT_CONFIG};
pub use types::{Config, LifecycleConfig, ManifestConfig};
