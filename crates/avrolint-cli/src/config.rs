//! Lint run configuration.
//!
//! Layers, lowest precedence first: built-in defaults, an optional JSON
//! config file, CI action inputs from the environment, then command-line
//! flags (applied by the `lint` subcommand).
//!
//! Action inputs arrive as `INPUT_<NAME>` variables. An empty value means
//! the input was not set.

use std::path::{Path, PathBuf};

use avrolint_schema::LintOptions;
use serde::Deserialize;

/// Input holding the path, or JSON array of paths, to lint.
pub const INPUT_AVSC_TO_LINT: &str = "INPUT_AVSC-TO-LINT";
/// Input toggling the documentation check.
pub const INPUT_UNDOCUMENTED_FIELD_CHECK: &str = "INPUT_UNDOCUMENTED-FIELD-CHECK";
/// Input toggling the complex-union check.
pub const INPUT_COMPLEX_UNION_CHECK: &str = "INPUT_COMPLEX-UNION-CHECK";

/// Resolved configuration for one lint run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LintConfig {
    /// A single path or a JSON array of paths. `None` if no layer set one.
    pub avsc: Option<String>,
    /// Rule selection.
    pub options: LintOptions,
}

/// Shape of the JSON config file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileConfig {
    avsc_file_path: Option<String>,
    #[serde(flatten)]
    options: LintOptions,
}

impl LintConfig {
    /// Load defaults, then the config file (if any), then the environment.
    ///
    /// `lookup` resolves environment variables; pass
    /// `|key| std::env::var(key).ok()` for the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if a
    /// boolean input is not a recognized boolean.
    pub fn load(
        config_file: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = config_file {
            config.apply_file(path)?;
        }
        config.apply_env(lookup)?;
        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::ParseFile {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "loaded config file");

        if file.avsc_file_path.is_some() {
            self.avsc = file.avsc_file_path;
        }
        self.options = file.options;
        Ok(())
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(avsc) = lookup(INPUT_AVSC_TO_LINT) {
            self.avsc = Some(avsc);
        }
        if let Some(value) = lookup(INPUT_UNDOCUMENTED_FIELD_CHECK) {
            self.options.undocumented_check =
                parse_bool_input(INPUT_UNDOCUMENTED_FIELD_CHECK, &value)?;
        }
        if let Some(value) = lookup(INPUT_COMPLEX_UNION_CHECK) {
            self.options.complex_union_check = parse_bool_input(INPUT_COMPLEX_UNION_CHECK, &value)?;
        }
        Ok(())
    }
}

/// Parse an action boolean input. Accepts `true`, `True`, `TRUE` and the
/// matching `false` spellings only.
pub fn parse_bool_input(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        other => Err(ConfigError::InvalidBoolean {
            name: name.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    ParseFile {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("input {name} must be one of true|True|TRUE|false|False|FALSE, got '{value}'")]
    InvalidBoolean { name: String, value: String },
}
