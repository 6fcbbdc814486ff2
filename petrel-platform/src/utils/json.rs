//! Structured-data helpers.
//!
//! Flattening of flat JSON objects into string maps, as used for
//! notification payloads and bridge messages whose values are strings by
//! convention but occasionally arrive as numbers or booleans.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::PlatformError;

/// Flattens a flat JSON object's top-level keys into a string-to-string map.
///
/// String values pass through unchanged; numbers and booleans are coerced
/// to their canonical string form. Iteration order of the result is not
/// guaranteed.
///
/// # Errors
///
/// Returns [`PlatformError::JsonValue`] for a value with no canonical
/// string form: `null`, an array, or a nested object.
pub fn json_object_to_map(
    object: &Map<String, Value>,
) -> Result<HashMap<String, String>, PlatformError> {
    let mut map = HashMap::with_capacity(object.len());
    for (key, value) in object {
        let rendered = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(PlatformError::JsonValue {
                    key: key.clone(),
                    value_type: json_type_name(other),
                })
            }
        };
        map.insert(key.clone(), rendered);
    }
    Ok(map)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("test fixture is not an object: {:?}", other),
        }
    }

    #[test]
    fn strings_pass_through_and_primitives_coerce() {
        let object = as_object(json!({
            "title": "New mail",
            "count": 3,
            "ratio": 0.5,
            "silent": false,
        }));

        let map = json_object_to_map(&object).expect("flattening failed");
        assert_eq!(map.len(), 4);
        assert_eq!(map["title"], "New mail");
        assert_eq!(map["count"], "3");
        assert_eq!(map["ratio"], "0.5");
        assert_eq!(map["silent"], "false");
    }

    #[test]
    fn empty_object_flattens_to_empty_map() {
        let object = as_object(json!({}));
        assert!(json_object_to_map(&object).expect("flattening failed").is_empty());
    }

    #[test]
    fn null_value_is_rejected() {
        let object = as_object(json!({ "subject": null }));
        match json_object_to_map(&object) {
            Err(PlatformError::JsonValue { key, value_type }) => {
                assert_eq!(key, "subject");
                assert_eq!(value_type, "null");
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn nested_values_are_rejected() {
        let object = as_object(json!({ "recipients": ["a@example.com"] }));
        assert!(matches!(
            json_object_to_map(&object),
            Err(PlatformError::JsonValue { value_type: "array", .. })
        ));

        let object = as_object(json!({ "payload": { "inner": 1 } }));
        assert!(matches!(
            json_object_to_map(&object),
            Err(PlatformError::JsonValue { value_type: "object", .. })
        ));
    }
}
