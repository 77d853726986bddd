// src/utils/json.rs

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use crate::errors::PhysicsError;

const INDENT: &[u8] = b"    ";

/// Renders a key-value mapping as JSON indented by four spaces.
///
/// # Errors
/// * `PhysicsError::InvalidType` if `data` does not serialize to a JSON object;
///   the message names the type that was received.
/// * `PhysicsError::SerializationError` if `data` cannot be serialized at all.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use rs_mechanics::utils::pretty_json;
///
/// let mut data = BTreeMap::new();
/// data.insert("a", 4);
/// assert_eq!(pretty_json(&data).unwrap(), "{\n    \"a\": 4\n}");
///
/// assert!(pretty_json(&vec![1, 2, 3]).is_err());
/// ```
pub fn pretty_json<T: Serialize + ?Sized>(data: &T) -> Result<String, PhysicsError> {
    let value = serde_json::to_value(data)
        .map_err(|e| PhysicsError::SerializationError(e.to_string()))?;
    if !value.is_object() {
        return Err(PhysicsError::InvalidType { found: json_type_name(&value).to_string() });
    }

    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)
        .map_err(|e| PhysicsError::SerializationError(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| PhysicsError::SerializationError(e.to_string()))
}

/// Prints a key-value mapping to standard output via [`pretty_json`], followed by a blank line.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> Result<(), PhysicsError> {
    let rendered = pretty_json(data)?;
    println!("{}\n", rendered);
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
