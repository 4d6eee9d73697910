//! # Lint Orchestration
//!
//! Runs the lint rules over every requested AVSC file and aggregates the
//! outcome.
//!
//! ## Pipeline
//!
//! Each path goes through, in order: existence check, JSON decode, schema
//! parse, documentation check, complex-union check. A failing step reports
//! one [`Diagnostic`] and, for the first three steps, stops processing that
//! file. Both rule checks run when enabled, so one file can report twice.
//!
//! ## Reporting
//!
//! Diagnostics go to the [`Reporter`] as they are found. Only after every
//! path has been attempted does [`Linter::lint`] return
//! [`LintError::ValidationFailed`], listing each failed path once in order
//! of first failure. The same path requested twice is checked (and
//! reported) twice but listed once.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::parser::{AvroSchemaParser, SchemaParser};
use crate::shape::RecordSchema;
use crate::walk::{complex_union_fields, undocumented_fields};

/// Placeholder reported when no path was supplied.
pub const UNDEFINED_PATH: &str = "undefined";

/// Which lint rules to run. Both default to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintOptions {
    /// Report fields with a missing or blank `doc`.
    pub undocumented_check: bool,
    /// Report fields that are or contain complex unions.
    pub complex_union_check: bool,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            undocumented_check: true,
            complex_union_check: true,
        }
    }
}

/// A single issue found while linting one file.
///
/// The `Display` output is the exact message handed to the reporter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The path was absent or is not a readable file.
    #[error("avscFilePath is invalid: '{path}'")]
    InvalidPath {
        /// The path as given, or [`UNDEFINED_PATH`].
        path: String,
    },

    /// The file is not valid JSON.
    #[error("AVSC file specified is not valid/parseable JSON: {path}\n  {reason}")]
    JsonParse {
        /// The file path.
        path: String,
        /// The JSON decoder's message.
        reason: String,
    },

    /// The file is JSON but not a legal Avro schema.
    #[error("AVSC file specified is not valid/parseable: {path}\n  {reason}")]
    SchemaParse {
        /// The file path.
        path: String,
        /// The schema parser's message.
        reason: String,
    },

    /// One or more fields have no documentation.
    #[error(
        "Invalid Schema at '{path}'! The following fields are not documented:\n  {}",
        indented(.fields)
    )]
    UndocumentedFields {
        /// The file path.
        path: String,
        /// Dotted paths of the undocumented fields, depth-first.
        fields: Vec<String>,
    },

    /// One or more fields are or contain complex unions.
    #[error(
        "Invalid Schema at '{path}'! The following fields are or contain complex unions:\n  {}",
        indented(.fields)
    )]
    ComplexUnions {
        /// The file path.
        path: String,
        /// Dotted paths of the offending fields, depth-first.
        fields: Vec<String>,
    },
}

/// The terminal outcome of a failed lint run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LintError {
    /// At least one file failed; paths are distinct, in first-failure order.
    #[error("Validation failed for the following files:\n  {}", indented(.files))]
    ValidationFailed {
        /// The failed paths.
        files: Vec<String>,
    },
}

fn indented(lines: &[String]) -> String {
    lines.join("\n  ")
}

/// Receives each [`Diagnostic`] as soon as it is found.
pub trait Reporter {
    /// Record one diagnostic.
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

impl Reporter for Vec<String> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.to_string());
    }
}

/// Turn the raw input into the list of paths to check.
///
/// A JSON array of strings is a list of paths (`null` entries are absent
/// paths). Anything else, including text that is not JSON, is a single
/// path taken verbatim. No input at all is a single absent path.
pub fn resolve_input_paths(input: Option<&str>) -> Vec<Option<String>> {
    let Some(raw) = input else {
        return vec![None];
    };
    match serde_json::from_str::<Vec<Option<String>>>(raw) {
        Ok(paths) => paths,
        Err(_) => vec![Some(raw.to_string())],
    }
}

/// Lints AVSC files with a configurable set of rules.
#[derive(Debug, Clone, Default)]
pub struct Linter<P = AvroSchemaParser> {
    options: LintOptions,
    parser: P,
}

impl Linter {
    /// A linter using the `apache-avro` parser.
    pub fn new(options: LintOptions) -> Self {
        Self::with_parser(options, AvroSchemaParser)
    }
}

impl<P: SchemaParser> Linter<P> {
    /// A linter using a custom schema parser.
    pub fn with_parser(options: LintOptions, parser: P) -> Self {
        Self { options, parser }
    }

    /// The rule selection in effect.
    pub fn options(&self) -> LintOptions {
        self.options
    }

    /// Lint a single path or a JSON array of paths.
    ///
    /// Every path is attempted; each issue is passed to `reporter` as it is
    /// found.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::ValidationFailed`] if any path failed.
    pub fn lint(&self, input: Option<&str>, reporter: &mut dyn Reporter) -> Result<(), LintError> {
        let paths = resolve_input_paths(input);
        tracing::debug!(count = paths.len(), "resolved input paths");

        let mut failed: Vec<String> = Vec::new();
        for path in &paths {
            if self.lint_path(path.as_deref(), reporter) {
                continue;
            }
            let label = path.as_deref().unwrap_or(UNDEFINED_PATH);
            if !failed.iter().any(|f| f == label) {
                failed.push(label.to_string());
            }
        }

        tracing::info!(checked = paths.len(), failed = failed.len(), "lint complete");

        if failed.is_empty() {
            Ok(())
        } else {
            Err(LintError::ValidationFailed { files: failed })
        }
    }

    /// Lint one path. Returns `true` if it passed.
    pub fn lint_path(&self, path: Option<&str>, reporter: &mut dyn Reporter) -> bool {
        let diagnostics = self.check_path(path);
        for diagnostic in &diagnostics {
            reporter.report(diagnostic);
        }
        diagnostics.is_empty()
    }

    /// Run the pipeline for one path and collect its diagnostics in order.
    pub fn check_path(&self, path: Option<&str>) -> Vec<Diagnostic> {
        let Some(path) = path else {
            return vec![Diagnostic::InvalidPath {
                path: UNDEFINED_PATH.to_string(),
            }];
        };

        let invalid_path = || {
            vec![Diagnostic::InvalidPath {
                path: path.to_string(),
            }]
        };

        if !Path::new(path).is_file() {
            return invalid_path();
        }

        let contents = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path, error = %e, "failed to read AVSC file");
                return invalid_path();
            }
        };

        let json: Value = match serde_json::from_slice(&contents) {
            Ok(value) => value,
            Err(e) => {
                return vec![Diagnostic::JsonParse {
                    path: path.to_string(),
                    reason: e.to_string(),
                }]
            }
        };

        let schema_parse = |reason: String| {
            vec![Diagnostic::SchemaParse {
                path: path.to_string(),
                reason,
            }]
        };

        let parsed = match self.parser.parse(&json) {
            Ok(parsed) => parsed,
            Err(e) => return schema_parse(e.to_string()),
        };

        let root = match RecordSchema::from_root(&json) {
            Ok(Some(root)) => root,
            Ok(None) => {
                tracing::debug!(path, "root schema is not a record; nothing to lint");
                return Vec::new();
            }
            Err(e) => return schema_parse(e.to_string()),
        };

        let prefix = parsed
            .full_name
            .or_else(|| root.name.clone())
            .unwrap_or_default();

        self.check_record(path, &prefix, &root)
    }

    /// Apply the enabled rules to an already-decoded root record.
    pub fn check_record(&self, path: &str, prefix: &str, root: &RecordSchema) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if self.options.undocumented_check {
            let fields = undocumented_fields(prefix, root);
            tracing::debug!(path, schema = prefix, count = fields.len(), "documentation check");
            if !fields.is_empty() {
                diagnostics.push(Diagnostic::UndocumentedFields {
                    path: path.to_string(),
                    fields,
                });
            }
        }

        if self.options.complex_union_check {
            let fields = complex_union_fields(prefix, root);
            tracing::debug!(path, schema = prefix, count = fields.len(), "complex union check");
            if !fields.is_empty() {
                diagnostics.push(Diagnostic::ComplexUnions {
                    path: path.to_string(),
                    fields,
                });
            }
        }

        diagnostics
    }
}
