//! # avrolint-cli: Command-Line Interface for avrolint
//!
//! Provides the `avrolint` binary: a drop-in for the CI action that lints
//! AVSC files for undocumented fields and complex unions.
//!
//! ## Subcommands
//!
//! - `avrolint lint`: lint a file or a JSON array of files.
//!
//! ## Crate Policy
//!
//! - Argument parsing and configuration live here; the lint rules live in
//!   `avrolint-schema`.
//! - stdout carries only diagnostics, so CI runners can parse it. Logs go
//!   to stderr.
//!
//! ```bash
//! avrolint lint schemas/user.avsc
//! avrolint lint '["a.avsc","b.avsc"]' --no-complex-union-check
//! INPUT_AVSC-TO-LINT=schemas/user.avsc avrolint lint
//! ```

pub mod config;
pub mod lint;
pub mod report;
