//! Boundary validation of untyped configuration values
//!
//! Fields are checked in a fixed order and the first mismatch wins. Nothing is
//! coerced: `"4"` is not a byte count and `1` is not a boolean.

use super::errors::{FieldKind, ValidationError};
use super::{CallArgument, ChartConfig};
use serde_json::{Map, Value};

/// Expected type of every recognised top-level field, in check order
pub const FIELD_TABLE: [(&str, FieldKind); 8] = [
    ("id", FieldKind::String),
    ("title", FieldKind::String),
    ("returnValueSize", FieldKind::Bytes),
    ("returnValueOnCallStack", FieldKind::Boolean),
    ("callArgs", FieldKind::Array),
    ("linkRegister", FieldKind::Boolean),
    ("padding", FieldKind::Bytes),
    ("yMax", FieldKind::Number),
];

/// Reads typed fields out of a JSON object, reporting mismatches by path
struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    prefix: String,
}

impl<'a> FieldReader<'a> {
    fn new(fields: &'a Map<String, Value>, prefix: impl Into<String>) -> Self {
        FieldReader {
            fields,
            prefix: prefix.into(),
        }
    }

    fn path(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.prefix, name)
        }
    }

    fn mismatch(&self, name: &str, expected: FieldKind) -> ValidationError {
        ValidationError::new(self.path(name), expected, self.fields.get(name))
    }

    fn string(&self, name: &str) -> Result<String, ValidationError> {
        match self.fields.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(self.mismatch(name, FieldKind::String)),
        }
    }

    fn boolean(&self, name: &str) -> Result<bool, ValidationError> {
        match self.fields.get(name) {
            Some(Value::Bool(b)) => Ok(*b),
            _ => Err(self.mismatch(name, FieldKind::Boolean)),
        }
    }

    fn bytes(&self, name: &str) -> Result<u32, ValidationError> {
        self.fields
            .get(name)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| self.mismatch(name, FieldKind::Bytes))
    }

    fn number(&self, name: &str) -> Result<f64, ValidationError> {
        match self.fields.get(name) {
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| self.mismatch(name, FieldKind::Number)),
            _ => Err(self.mismatch(name, FieldKind::Number)),
        }
    }

    fn array(&self, name: &str) -> Result<&'a [Value], ValidationError> {
        match self.fields.get(name) {
            Some(Value::Array(items)) => Ok(items.as_slice()),
            _ => Err(self.mismatch(name, FieldKind::Array)),
        }
    }
}

/// Validate `value` against [`FIELD_TABLE`] and build the typed config
pub fn validate(value: &Value) -> Result<ChartConfig, ValidationError> {
    let fields = value
        .as_object()
        .ok_or_else(|| ValidationError::new("config", FieldKind::Object, Some(value)))?;
    let reader = FieldReader::new(fields, "");

    let id = reader.string("id")?;
    let title = reader.string("title")?;
    let return_value_size = reader.bytes("returnValueSize")?;
    let return_value_on_call_stack = reader.boolean("returnValueOnCallStack")?;
    let raw_args = reader.array("callArgs")?;
    let link_register = reader.boolean("linkRegister")?;
    let padding = reader.bytes("padding")?;
    let y_max = reader.number("yMax")?;

    // Elements only after every top-level field has passed
    let call_args = raw_args
        .iter()
        .enumerate()
        .map(|(index, item)| call_argument(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChartConfig {
        id,
        title,
        return_value_size,
        return_value_on_call_stack,
        call_args,
        link_register,
        padding,
        y_max,
    })
}

fn call_argument(index: usize, item: &Value) -> Result<CallArgument, ValidationError> {
    let path = format!("callArgs[{}]", index);
    let fields = item
        .as_object()
        .ok_or_else(|| ValidationError::new(path.clone(), FieldKind::Object, Some(item)))?;
    let reader = FieldReader::new(fields, path);

    Ok(CallArgument {
        name: reader.string("name")?,
        size: reader.bytes("size")?,
        color: reader.string("color")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "id": "frame",
            "title": "add(a, b)",
            "returnValueSize": 4,
            "returnValueOnCallStack": false,
            "callArgs": [
                { "name": "a", "size": 4, "color": "red" },
                { "name": "b", "size": 8, "color": "#89b4fa" }
            ],
            "linkRegister": true,
            "padding": 4,
            "yMax": 64
        })
    }

    fn field_of(value: &Value) -> String {
        validate(value).unwrap_err().field
    }

    #[test]
    fn test_valid_config() {
        let config = validate(&valid()).unwrap();
        assert_eq!(config.id, "frame");
        assert_eq!(config.call_args.len(), 2);
        assert_eq!(config.call_args[1].color, "#89b4fa");
        assert_eq!(config.y_max, 64.0);
    }

    #[test]
    fn test_link_register_string_is_rejected() {
        let mut value = valid();
        value["linkRegister"] = json!("true");
        let err = validate(&value).unwrap_err();
        assert_eq!(err.field, "linkRegister");
        assert_eq!(err.expected, FieldKind::Boolean);
        assert_eq!(err.found, "string");
    }

    #[test]
    fn test_first_mismatch_wins() {
        let mut value = valid();
        value["padding"] = json!(true);
        value["title"] = json!(7);
        assert_eq!(field_of(&value), "title");
    }

    #[test]
    fn test_missing_field() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("yMax");
        let err = validate(&value).unwrap_err();
        assert_eq!(err.field, "yMax");
        assert_eq!(err.found, "missing");
    }

    #[test]
    fn test_sizes_must_be_non_negative_integers() {
        let mut value = valid();
        value["returnValueSize"] = json!(-4);
        assert_eq!(field_of(&value), "returnValueSize");

        let mut value = valid();
        value["padding"] = json!(2.5);
        assert_eq!(field_of(&value), "padding");

        let mut value = valid();
        value["padding"] = json!(u64::from(u32::MAX) + 1);
        assert_eq!(field_of(&value), "padding");
    }

    #[test]
    fn test_y_max_accepts_fractions() {
        let mut value = valid();
        value["yMax"] = json!(40.5);
        assert_eq!(validate(&value).unwrap().y_max, 40.5);
    }

    #[test]
    fn test_call_argument_paths() {
        let mut value = valid();
        value["callArgs"][1]["size"] = json!("8");
        assert_eq!(field_of(&value), "callArgs[1].size");

        let mut value = valid();
        value["callArgs"][0] = json!("a");
        assert_eq!(field_of(&value), "callArgs[0]");
    }

    #[test]
    fn test_call_args_checked_before_link_register() {
        let mut value = valid();
        value["callArgs"] = json!({ "a": 4 });
        value["linkRegister"] = json!(1);
        assert_eq!(field_of(&value), "callArgs");
    }

    #[test]
    fn test_top_level_fields_checked_before_arguments() {
        let mut value = valid();
        value["callArgs"][0]["name"] = json!(1);
        value["linkRegister"] = json!("yes");
        assert_eq!(field_of(&value), "linkRegister");

        value["linkRegister"] = json!(false);
        assert_eq!(field_of(&value), "callArgs[0].name");
    }

    #[test]
    fn test_non_object_root() {
        let err = validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.field, "config");
        assert_eq!(err.expected, FieldKind::Object);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut value = valid();
        value["theme"] = json!("dark");
        assert!(validate(&value).is_ok());
    }
}
