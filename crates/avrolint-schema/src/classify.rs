//! # Field Classification
//!
//! Two independent questions asked of every field during a walk:
//!
//! - Does its type lead to a nested record the walk must descend into?
//!   A bare record, an array or map whose element is a record, or a union
//!   with a record branch.
//! - Does its type (or its array/map element) declare a union, and is that
//!   union "complex"?
//!
//! The answers are independent: a union of `null` and a record is both
//! descended into and checked as a union.

use crate::shape::{Field, RecordSchema, TypeShape};

impl TypeShape {
    /// The nested record reachable from this type, if any.
    ///
    /// Only the first record branch of a union is returned; later record
    /// branches in the same union are not visited. Arrays and maps count
    /// only when their element type is itself a record.
    pub fn nested_record(&self) -> Option<&RecordSchema> {
        match self {
            Self::Record(record) => Some(record),
            Self::Array(element) | Self::Map(element) => match element.as_ref() {
                Self::Record(record) => Some(record),
                _ => None,
            },
            Self::Union(branches) => branches.iter().find_map(|branch| match branch {
                Self::Record(record) => Some(record),
                _ => None,
            }),
            Self::Scalar(_) => None,
        }
    }

    /// The union declared by this type or by its array/map element.
    pub fn union_branches(&self) -> Option<&[TypeShape]> {
        match self {
            Self::Union(branches) => Some(branches),
            Self::Array(element) | Self::Map(element) => match element.as_ref() {
                Self::Union(branches) => Some(branches),
                _ => None,
            },
            Self::Record(_) | Self::Scalar(_) => None,
        }
    }
}

/// Whether a union is anything other than the `[null, T]` optional idiom.
///
/// Single-branch unions, `[T, null]`, and unions of three or more branches
/// are all complex.
pub fn is_complex_union(branches: &[TypeShape]) -> bool {
    !matches!(branches, [first, _] if first.is_null())
}

impl Field {
    /// Whether the field has a non-blank `doc`.
    pub fn is_documented(&self) -> bool {
        self.doc.as_deref().is_some_and(|doc| !doc.trim().is_empty())
    }

    /// Whether the field's type is, or contains, a record to descend into.
    pub fn is_or_contains_record(&self) -> bool {
        self.ty.nested_record().is_some()
    }

    /// The nested record schema of this field, if any.
    pub fn record_schema(&self) -> Option<&RecordSchema> {
        self.ty.nested_record()
    }

    /// The union declared by this field's type, if any.
    pub fn union_schema(&self) -> Option<&[TypeShape]> {
        self.ty.union_branches()
    }

    /// Whether the field is or contains a complex union.
    pub fn is_complex_union(&self) -> bool {
        self.union_schema().is_some_and(is_complex_union)
    }
}
