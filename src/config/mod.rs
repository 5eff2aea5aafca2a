//! Chart configuration
//!
//! A [`ChartConfig`] describes one function call: the size and placement of
//! its return value, its ordered arguments, whether the link register is
//! saved, and how much alignment padding the frame carries.
//!
//! Configs built in Rust are well-typed by construction. Configs coming from
//! outside (JSON files, embedding scripts) pass through [`validate`] first,
//! which checks each field against [`validate::FIELD_TABLE`] and fails on the
//! first mismatch.
//!
//! # Document format
//!
//! ```json
//! {
//!   "id": "add-frame",
//!   "title": "int add(int a, int b)",
//!   "returnValueSize": 4,
//!   "returnValueOnCallStack": false,
//!   "callArgs": [{ "name": "a", "size": 4, "color": "red" }],
//!   "linkRegister": true,
//!   "padding": 4,
//!   "yMax": 32
//! }
//! ```
//!
//! A document may also hold an array of such objects.

pub mod errors;
pub mod validate;

pub use errors::{ConfigError, FieldKind, ValidationError};
pub use validate::validate;

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One argument passed to the called function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallArgument {
    pub name: String,
    /// Size in bytes
    pub size: u32,
    /// Display color token (`"red"`, `"#89b4fa"`, ...)
    pub color: String,
}

impl CallArgument {
    pub fn new(name: impl Into<String>, size: u32, color: impl Into<String>) -> Self {
        CallArgument {
            name: name.into(),
            size,
            color: color.into(),
        }
    }
}

/// Input for a single chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Identifier of the container the chart is rendered into
    pub id: String,
    pub title: String,
    pub return_value_size: u32,
    /// `true` when the callee writes its return value into the frame,
    /// `false` when it comes back in a register
    pub return_value_on_call_stack: bool,
    /// Arguments in push order
    pub call_args: Vec<CallArgument>,
    pub link_register: bool,
    pub padding: u32,
    /// Ceiling of the y-axis; not checked against the frame size
    pub y_max: f64,
}

impl ChartConfig {
    /// Validate an untyped value and convert it
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        validate(value)
    }
}

/// Parse a JSON document holding one config or an array of configs
pub fn parse_str(text: &str) -> Result<Vec<ChartConfig>, ConfigError> {
    let document: Value = serde_json::from_str(text)?;
    let items = match document {
        Value::Array(items) => items,
        single => vec![single],
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            validate(item).map_err(|source| {
                tracing::warn!(index, field = %source.field, "config rejected");
                ConfigError::Validation { index, source }
            })
        })
        .collect()
}

/// Read and parse a config document from disk
pub fn load(path: &Path) -> Result<Vec<ChartConfig>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let configs = parse_str(&text)?;
    tracing::debug!(path = %path.display(), count = configs.len(), "loaded chart configs");
    Ok(configs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"{
        "id": "f", "title": "f()", "returnValueSize": 8,
        "returnValueOnCallStack": true, "callArgs": [],
        "linkRegister": false, "padding": 0, "yMax": 32
    }"#;

    #[test]
    fn test_parse_single_object() {
        let configs = parse_str(SINGLE).unwrap();
        assert_eq!(configs.len(), 1);
        assert!(configs[0].return_value_on_call_stack);
    }

    #[test]
    fn test_parse_array_reports_index() {
        let text = format!("[{}, {{\"id\": 3}}]", SINGLE);
        match parse_str(&text) {
            Err(ConfigError::Validation { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source.field, "id");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(parse_str("{ nope"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let config = &parse_str(SINGLE).unwrap()[0];
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["returnValueOnCallStack"], Value::Bool(true));
        assert_eq!(validate(&json).unwrap(), *config);
    }
}
