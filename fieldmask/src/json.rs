//! Bridging `serde_json::Value` payloads into the engine.
//!
//! The typical consumer is a responder that decodes or assembles a JSON body,
//! masks it, and serializes the result. JSON null maps to the engine's null
//! reference (`Ref(None)`); JSON objects map to [`Value::Map`] because their
//! keys are runtime strings, not static field names. Converting back, both
//! records and maps become objects.

use serde_json::Value as JsonValue;

use crate::masking::MaskPolicy;
use crate::value::{Scalar, Value};

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Ref(None),
            JsonValue::Bool(flag) => Value::Scalar(Scalar::Bool(flag)),
            JsonValue::Number(number) => number.as_i64().map_or_else(
                || Value::Scalar(Scalar::Float(number.as_f64().unwrap_or(f64::NAN))),
                |int| Value::Scalar(Scalar::Int(int)),
            ),
            JsonValue::String(text) => Value::Scalar(Scalar::Str(text)),
            JsonValue::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Record(fields) => JsonValue::Object(
                fields
                    .into_iter()
                    .map(|(name, field)| (name, JsonValue::from(field)))
                    .collect(),
            ),
            Value::Map(entries) => JsonValue::Object(
                entries
                    .into_iter()
                    .map(|(key, entry)| (key, JsonValue::from(entry)))
                    .collect(),
            ),
            Value::Seq(elements) => {
                JsonValue::Array(elements.into_iter().map(JsonValue::from).collect())
            }
            Value::Ref(Some(target)) => JsonValue::from(*target),
            Value::Ref(None) => JsonValue::Null,
            Value::Scalar(Scalar::Str(text)) => JsonValue::String(text),
            Value::Scalar(Scalar::Int(int)) => JsonValue::Number(int.into()),
            // Non-finite floats have no JSON representation and become null.
            Value::Scalar(Scalar::Float(float)) => serde_json::Number::from_f64(float)
                .map_or(JsonValue::Null, JsonValue::Number),
            Value::Scalar(Scalar::Bool(flag)) => JsonValue::Bool(flag),
        }
    }
}

/// Masks a JSON value under `policy` and returns it as JSON again.
#[must_use]
pub fn mask_json(policy: &MaskPolicy, json: JsonValue) -> JsonValue {
    JsonValue::from(policy.mask(Value::from(json)))
}
