//! Configuration file discovery and loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::schema::LintConfig;
use crate::error::{LessonLintError, Result};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".lesson-lint.yml";

/// Load a config file and parse it into [`LintConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LessonLintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LessonLintError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`LintConfig`].
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintConfig> {
    if content.trim().is_empty() {
        return Ok(LintConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LessonLintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the config to use.
///
/// An explicit path must exist. Otherwise `.lesson-lint.yml` in `dir` is
/// used when present, and the defaults when not.
pub fn discover_config(explicit: Option<&Path>, dir: &Path) -> Result<LintConfig> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        debug!("Loading config from {}", path.display());
        load_config_file(&path)
    } else {
        Ok(LintConfig::default())
    }
}
