//! # Schema Tree Model
//!
//! A typed view of an AVSC document, decoded once from `serde_json::Value`.
//!
//! AVSC is duck-typed JSON: a type is a bare name string, an array (a
//! union), or an object whose `type` tag says what kind of node it is. The
//! lint rules only care about a handful of shapes, so the tree is folded into
//! [`TypeShape`] and every check matches on that instead of re-inspecting
//! string tags.
//!
//! ## Tag comparison
//!
//! Tags are compared ASCII-case-insensitively against `record`, `array` and
//! `map`. Anything else (primitives, `enum`, `fixed`, named references) is a
//! [`TypeShape::Scalar`] carrying the tag text.

use serde_json::{Map, Value};
use thiserror::Error;

/// The Avro `null` type name.
pub const NULL_TYPE: &str = "null";

const RECORD_TAG: &str = "record";
const ARRAY_TAG: &str = "array";
const MAP_TAG: &str = "map";

/// Errors raised when a JSON tree cannot be read as an AVSC type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A type object has no `type` tag.
    #[error("type object is missing its 'type' tag")]
    MissingTypeTag,

    /// A field object has no string `name`.
    #[error("field is missing a string 'name'")]
    MissingFieldName,

    /// A field object has no `type`.
    #[error("field '{0}' is missing its 'type'")]
    MissingFieldType(String),

    /// A record's `fields` member is present but not an array.
    #[error("record '{0}' has a 'fields' member that is not an array")]
    FieldsNotArray(String),

    /// An `array` or `map` type is missing its element type.
    #[error("{kind} type is missing its '{child}' type")]
    MissingChild {
        /// The container kind (`array` or `map`).
        kind: &'static str,
        /// The missing member (`items` or `values`).
        child: &'static str,
    },

    /// A JSON value that cannot denote a type (number, bool, null).
    #[error("unexpected JSON value where a type was expected: {0}")]
    UnexpectedValue(String),
}

/// The structural kind of an AVSC type, as far as linting is concerned.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeShape {
    /// Any leaf: a primitive, a named reference, `enum`, `fixed`, or an
    /// object with an unrecognized tag.
    Scalar(String),
    /// A record with its own field list.
    Record(RecordSchema),
    /// An array; the box holds the `items` type.
    Array(Box<TypeShape>),
    /// A map; the box holds the `values` type.
    Map(Box<TypeShape>),
    /// A union; branch order is significant.
    Union(Vec<TypeShape>),
}

/// A record type: the recursion point of the tree walk.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSchema {
    /// The record's own `name` member, if any.
    pub name: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

/// One entry of a record's `fields` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name, unique within its record.
    pub name: String,
    /// The `doc` string. Absent, `null` and non-string docs are all `None`.
    pub doc: Option<String>,
    /// The field's declared type.
    pub ty: TypeShape,
}

impl TypeShape {
    /// Decode a JSON type declaration.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if the value (or anything nested in it) is
    /// not a string, array, or tagged object, or if a record field or
    /// container is missing a required member.
    pub fn from_json(value: &Value) -> Result<Self, ShapeError> {
        match value {
            Value::String(name) => Ok(Self::Scalar(name.clone())),
            Value::Array(branches) => branches
                .iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Union),
            Value::Object(object) => Self::from_object(object),
            other => Err(ShapeError::UnexpectedValue(other.to_string())),
        }
    }

    fn from_object(object: &Map<String, Value>) -> Result<Self, ShapeError> {
        let tag = object.get("type").ok_or(ShapeError::MissingTypeTag)?;
        let Some(tag) = tag.as_str() else {
            return Ok(Self::Scalar(tag.to_string()));
        };

        if tag.eq_ignore_ascii_case(RECORD_TAG) {
            RecordSchema::from_object(object).map(Self::Record)
        } else if tag.eq_ignore_ascii_case(ARRAY_TAG) {
            let items = object.get("items").ok_or(ShapeError::MissingChild {
                kind: ARRAY_TAG,
                child: "items",
            })?;
            Ok(Self::Array(Box::new(Self::from_json(items)?)))
        } else if tag.eq_ignore_ascii_case(MAP_TAG) {
            let values = object.get("values").ok_or(ShapeError::MissingChild {
                kind: MAP_TAG,
                child: "values",
            })?;
            Ok(Self::Map(Box::new(Self::from_json(values)?)))
        } else {
            Ok(Self::Scalar(tag.to_string()))
        }
    }

    /// Whether this type is the `null` marker, as a bare name or a tagged
    /// object.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(name) if name.eq_ignore_ascii_case(NULL_TYPE))
    }
}

impl RecordSchema {
    /// Decode the root of an AVSC document.
    ///
    /// Returns `Ok(None)` when the root is a valid type but not a record;
    /// such a schema has no fields to lint.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if the root cannot be decoded at all.
    pub fn from_root(value: &Value) -> Result<Option<Self>, ShapeError> {
        match TypeShape::from_json(value)? {
            TypeShape::Record(record) => Ok(Some(record)),
            _ => Ok(None),
        }
    }

    fn from_object(object: &Map<String, Value>) -> Result<Self, ShapeError> {
        let name = object
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);

        let fields = match object.get("fields") {
            None => Vec::new(),
            Some(Value::Array(fields)) => fields
                .iter()
                .map(Field::from_json)
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(ShapeError::FieldsNotArray(
                    name.unwrap_or_else(|| "<anonymous>".to_string()),
                ))
            }
        };

        Ok(Self { name, fields })
    }
}

impl Field {
    /// Decode one entry of a `fields` array.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::MissingFieldName`] or
    /// [`ShapeError::MissingFieldType`] for incomplete field objects, or any
    /// error from decoding the field's type.
    pub fn from_json(value: &Value) -> Result<Self, ShapeError> {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .ok_or(ShapeError::MissingFieldName)?
            .to_string();

        let ty = value
            .get("type")
            .ok_or_else(|| ShapeError::MissingFieldType(name.clone()))?;
        let ty = TypeShape::from_json(ty)?;

        let doc = value.get("doc").and_then(Value::as_str).map(str::to_string);

        Ok(Self { name, doc, ty })
    }
}
