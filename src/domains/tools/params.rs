//! Shared parameter helpers used by the tool parameter structs.
//!
//! Tool parameters are plain `#[derive(Deserialize, JsonSchema)]` structs.
//! The helpers here cover the lenient decodings those structs need on top of
//! the stock serde behaviour.

use schemars::JsonSchema;
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Accept a JSON number or a string holding one (`"2"`, `" 4.5 "`).
pub fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("is out of range: {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected a number, got {:?}", s))),
        other => Err(D::Error::custom(format!(
            "expected a number, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Decode an object of string values into pairs, keeping the caller's order.
pub fn string_pairs<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = serde_json::Map::<String, Value>::deserialize(deserializer)?;
    map.into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            other => Err(D::Error::custom(format!(
                "expected a mapping of strings, key {:?} is {}",
                key,
                json_type_name(&other)
            ))),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
