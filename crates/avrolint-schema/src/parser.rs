//! # Schema Parser Boundary
//!
//! Whether a document is a legal Avro schema at all is decided by a real
//! Avro implementation, not by the lint rules. The linter only needs two
//! things back: success or a rejection message, and the fully-qualified name
//! the parser resolved for the root type. The lint walk itself runs over the
//! original JSON.

use serde_json::Value;
use thiserror::Error;

/// Rejection from a [`SchemaParser`], carrying the parser's own message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SchemaParseError {
    /// The parser's description of what is wrong.
    pub message: String,
}

impl SchemaParseError {
    /// Wrap a parser message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// What the linter keeps from a successful parse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedSchema {
    /// Fully-qualified name of the root type (`namespace.name`), if the root
    /// is a named type.
    pub full_name: Option<String>,
}

/// Structural validation of an AVSC document.
pub trait SchemaParser {
    /// Parse `json` as an Avro schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaParseError`] if `json` is not a legal Avro schema.
    fn parse(&self, json: &Value) -> Result<ParsedSchema, SchemaParseError>;
}

/// [`SchemaParser`] backed by the `apache-avro` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvroSchemaParser;

impl SchemaParser for AvroSchemaParser {
    fn parse(&self, json: &Value) -> Result<ParsedSchema, SchemaParseError> {
        let schema = apache_avro::Schema::parse(json)
            .map_err(|e| SchemaParseError::new(e.to_string()))?;
        Ok(ParsedSchema {
            full_name: schema.name().map(|name| name.fullname(None)),
        })
    }
}
