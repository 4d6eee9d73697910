//! # avrolint-schema: Avro Schema Style Linting
//!
//! Checks AVSC documents against two style rules:
//!
//! - every field carries a non-blank `doc`;
//! - no field is, or contains, a complex union. The only union allowed is
//!   the optional idiom `["null", T]`.
//!
//! ## Modules
//!
//! - [`shape`] decodes the duck-typed AVSC JSON into a [`TypeShape`] tree.
//! - [`classify`] answers "does this field lead to a nested record?" and
//!   "is this field's union complex?".
//! - [`walk`] is the depth-first traversal shared by both rules.
//! - [`parser`] is the boundary to a real Avro parser, which decides whether
//!   a document is a legal schema and resolves its full name.
//! - [`lint`] runs the per-file pipeline, streams [`Diagnostic`]s to a
//!   [`Reporter`], and aggregates failures.
//!
//! ## Crate Policy
//!
//! - The lint rules never mutate the schema tree.
//! - Violation paths are deterministic: fields in declaration order, nested
//!   violations directly after their containing field.

pub mod classify;
pub mod lint;
pub mod parser;
pub mod shape;
pub mod walk;

pub use classify::is_complex_union;
pub use lint::{
    resolve_input_paths, Diagnostic, LintError, LintOptions, Linter, Reporter, UNDEFINED_PATH,
};
pub use parser::{AvroSchemaParser, ParsedSchema, SchemaParseError, SchemaParser};
pub use shape::{Field, RecordSchema, ShapeError, TypeShape, NULL_TYPE};
pub use walk::{complex_union_fields, undocumented_fields, walk, ComplexUnion, FieldRule, Undocumented};
