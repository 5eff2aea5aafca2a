//! Error types for chart configuration
//!
//! [`ValidationError`] is the only failure a well-formed JSON document can
//! produce: it names the first field whose runtime type does not match the
//! expected type table. [`ConfigError`] wraps it together with the I/O and
//! JSON syntax failures that can occur while loading a file.

use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Expected shape of a configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
    /// Non-negative integer byte count that fits in a `u32`
    Bytes,
    Number,
    Array,
    Object,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Boolean => "boolean",
            FieldKind::Bytes => "non-negative integer",
            FieldKind::Number => "number",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// The JSON type actually found in place of an expected field
pub fn json_kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(n)) if n.is_u64() => "integer",
        Some(Value::Number(n)) if n.is_i64() => "negative integer",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// A configuration field whose type does not match the expected type table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid chart config: `{field}` must be a {expected}, found {found}")]
pub struct ValidationError {
    /// Field path, e.g. `linkRegister` or `callArgs[1].size`
    pub field: String,
    pub expected: FieldKind,
    pub found: &'static str,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, expected: FieldKind, found: Option<&Value>) -> Self {
        ValidationError {
            field: field.into(),
            expected,
            found: json_kind(found),
        }
    }
}

/// Errors raised while reading configuration documents
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `index` is the position of the offending config within an array document
    #[error("config #{index}: {source}")]
    Validation {
        index: usize,
        #[source]
        source: ValidationError,
    },
}
