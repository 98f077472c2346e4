//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{MarkdefError, MarkdefResult};

use super::types::Config;

/// Project config location, relative to the project root
pub const PROJECT_CONFIG: &str = ".markdef/config.toml";

/// Non-fatal configuration warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MarkdefResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text, collecting unknown keys as warnings
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> MarkdefResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MarkdefError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// A config file that fails to parse is skipped with a warning and the
/// next layer is tried.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG));
    let user_config = user_config_dir().map(|dir| dir.join("markdef/config.toml"));

    for path in project_config.into_iter().chain(user_config) {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for w in &warnings {
                    warn!(
                        file = %w.file.display(),
                        line = ?w.line,
                        suggestion = ?w.suggestion,
                        "unknown config key '{}'",
                        w.key
                    );
                }
                debug!(path = %path.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(err) => warn!(path = %path.display(), "ignoring config: {err}"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (MARKDEF_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable source
pub fn apply_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // MARKDEF_CONTINUE_ON_ERROR
    if let Some(val) = var("MARKDEF_CONTINUE_ON_ERROR") {
        config.lifecycle.continue_on_error = parse_flag(&val);
    }

    // MARKDEF_MARK_VALID
    if let Some(val) = var("MARKDEF_MARK_VALID") {
        config.lifecycle.mark_valid = parse_flag(&val);
    }

    // MARKDEF_MANIFEST_FILE
    if let Some(file) = var("MARKDEF_MANIFEST_FILE") {
        let file = file.trim();
        if !file.is_empty() {
            config.manifest.file = file.to_string();
        }
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}

/// User config directory, honouring XDG_CONFIG_HOME
fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "lifecycle",
        "continue_on_error",
        "mark_valid",
        "manifest",
        "file",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
