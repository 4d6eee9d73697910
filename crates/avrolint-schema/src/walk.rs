//! # Field Tree Walk
//!
//! One depth-first, pre-order traversal shared by every lint rule. For each
//! field of a record, in declaration order:
//!
//! 1. the field path is `<prefix>.<field name>`;
//! 2. the rule is applied to the field, and the path recorded if it fires;
//! 3. if the field leads to a nested record, that record is walked with the
//!    field path as its prefix, whether or not the rule fired.
//!
//! Nested violations therefore follow their containing field's own
//! violation directly.

use crate::shape::{Field, RecordSchema};

/// A per-field lint check applied during a walk.
pub trait FieldRule {
    /// Returns `true` if the field violates the rule.
    fn violates(&self, field: &Field) -> bool;
}

impl<F> FieldRule for F
where
    F: Fn(&Field) -> bool,
{
    fn violates(&self, field: &Field) -> bool {
        self(field)
    }
}

/// Fields with no `doc`, or a blank one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Undocumented;

impl FieldRule for Undocumented {
    fn violates(&self, field: &Field) -> bool {
        !field.is_documented()
    }
}

/// Fields whose type, or whose array/map element, is a complex union.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexUnion;

impl FieldRule for ComplexUnion {
    fn violates(&self, field: &Field) -> bool {
        field.is_complex_union()
    }
}

/// Walk `schema` and collect the dotted path of every field `rule` flags.
pub fn walk(prefix: &str, schema: &RecordSchema, rule: &dyn FieldRule) -> Vec<String> {
    let mut paths = Vec::new();
    walk_into(prefix, schema, rule, &mut paths);
    paths
}

fn walk_into(prefix: &str, schema: &RecordSchema, rule: &dyn FieldRule, acc: &mut Vec<String>) {
    for field in &schema.fields {
        let path = format!("{prefix}.{}", field.name);
        if rule.violates(field) {
            acc.push(path.clone());
        }
        if let Some(nested) = field.record_schema() {
            walk_into(&path, nested, rule, acc);
        }
    }
}

/// Paths of every undocumented field, depth-first.
pub fn undocumented_fields(prefix: &str, schema: &RecordSchema) -> Vec<String> {
    walk(prefix, schema, &Undocumented)
}

/// Paths of every field that is or contains a complex union, depth-first.
pub fn complex_union_fields(prefix: &str, schema: &RecordSchema) -> Vec<String> {
    walk(prefix, schema, &ComplexUnion)
}
