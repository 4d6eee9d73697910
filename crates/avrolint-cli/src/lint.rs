//! # Lint Subcommand
//!
//! Lints one AVSC file or a JSON array of them, streaming every diagnostic
//! to stdout and finishing with one aggregate failure line.
//!
//! Behaves like the CI action it replaces: the input and both check toggles
//! may come from `INPUT_*` environment variables, and flags given on the
//! command line win over them.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use avrolint_schema::Linter;

use crate::config::LintConfig;
use crate::report::{AnnotationReporter, OutputFormat};

/// Arguments for the `avrolint lint` subcommand.
#[derive(Args, Debug, Default)]
pub struct LintArgs {
    /// AVSC file path, or a JSON array of paths (e.g. '["a.avsc","b.avsc"]').
    #[arg(value_name = "AVSC")]
    pub avsc: Option<String>,

    /// Skip the undocumented-field check.
    #[arg(long)]
    pub no_undocumented_check: bool,

    /// Skip the complex-union check.
    #[arg(long)]
    pub no_complex_union_check: bool,

    /// Diagnostic output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Github)]
    pub format: OutputFormat,
}

impl LintArgs {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_to(&self, mut config: LintConfig) -> LintConfig {
        if let Some(avsc) = &self.avsc {
            config.avsc = Some(avsc.clone());
        }
        if self.no_undocumented_check {
            config.options.undocumented_check = false;
        }
        if self.no_complex_union_check {
            config.options.complex_union_check = false;
        }
        config
    }
}

/// Execute the lint subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure.
///
/// # Errors
///
/// Returns an error if the configuration cannot be resolved.
pub fn run_lint(args: &LintArgs, config_file: Option<&Path>) -> Result<u8> {
    let config = LintConfig::load(config_file, |key| std::env::var(key).ok())
        .context("failed to resolve lint configuration")?;
    let config = args.apply_to(config);

    let stdout = std::io::stdout();
    Ok(execute(&config, args.format, stdout.lock()))
}

/// Lint with a resolved configuration, writing diagnostics to `out`.
pub fn execute<W: Write>(config: &LintConfig, format: OutputFormat, out: W) -> u8 {
    tracing::info!(
        input = config.avsc.as_deref().unwrap_or(avrolint_schema::UNDEFINED_PATH),
        undocumented_check = config.options.undocumented_check,
        complex_union_check = config.options.complex_union_check,
        "linting"
    );

    let mut reporter = AnnotationReporter::new(out, format);
    match Linter::new(config.options).lint(config.avsc.as_deref(), &mut reporter) {
        Ok(()) => 0,
        Err(e) => {
            reporter.error(&e.to_string());
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avrolint_schema::LintOptions;

    fn run(config: &LintConfig) -> (u8, String) {
        let mut out = Vec::new();
        let code = execute(config, OutputFormat::Github, &mut out);
        (code, String::from_utf8(out).unwrap())
    }

    fn write_schema(dir: &tempfile::TempDir, name: &str, doc: Option<&str>) -> String {
        let field = match doc {
            Some(doc) => serde_json::json!({"name": "id", "type": "long", "doc": doc}),
            None => serde_json::json!({"name": "id", "type": "long"}),
        };
        let schema = serde_json::json!({
            "type": "record",
            "name": "R",
            "namespace": "com.x",
            "fields": [field]
        });
        let path = dir.path().join(name);
        std::fs::write(&path, schema.to_string()).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn args_override_config() {
        let args = LintArgs {
            avsc: Some("cli.avsc".to_string()),
            no_undocumented_check: true,
            ..LintArgs::default()
        };
        let config = args.apply_to(LintConfig {
            avsc: Some("env.avsc".to_string()),
            options: LintOptions::default(),
        });
        assert_eq!(config.avsc.as_deref(), Some("cli.avsc"));
        assert!(!config.options.undocumented_check);
        assert!(config.options.complex_union_check);
    }

    #[test]
    fn unset_args_keep_config() {
        let loaded = LintConfig {
            avsc: Some("env.avsc".to_string()),
            options: LintOptions {
                undocumented_check: false,
                complex_union_check: true,
            },
        };
        assert_eq!(LintArgs::default().apply_to(loaded.clone()), loaded);
    }

    #[test]
    fn clean_schema_exits_zero_silently() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(&dir, "ok.avsc", Some("the id"));
        let (code, out) = run(&LintConfig {
            avsc: Some(path),
            options: LintOptions::default(),
        });
        assert_eq!(code, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn violations_then_aggregate_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(&dir, "bad.avsc", None);
        let (code, out) = run(&LintConfig {
            avsc: Some(path.clone()),
            options: LintOptions::default(),
        });
        assert_eq!(code, 1);
        assert_eq!(
            out,
            format!(
                "::error::Invalid Schema at '{path}'! The following fields are not documented:%0A  com.x.R.id\n\
                 ::error::Validation failed for the following files:%0A  {path}\n"
            )
        );
    }

    #[test]
    fn missing_input_is_undefined() {
        let (code, out) = run(&LintConfig::default());
        assert_eq!(code, 1);
        assert_eq!(
            out,
            "::error::avscFilePath is invalid: 'undefined'\n\
             ::error::Validation failed for the following files:%0A  undefined\n"
        );
    }
}
