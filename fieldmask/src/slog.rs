//! Adapters for emitting masked payloads through `slog`.
//!
//! This module connects the [`ToValue`] adapter boundary with `slog` by
//! providing a `slog::Value` wrapper that serializes the *masked* form of a
//! payload as structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from a masked value tree,
//!   never from the original payload.
//! - Staying infallible from the caller's point of view: the value-to-JSON
//!   conversion is total, so there is no error path to surface.
//!
//! It does not configure `slog` or define masking policy.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::masking::MaskPolicy;
use crate::value::ToValue;

/// A `slog::Value` that emits an owned masked payload as structured JSON.
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts payloads into a `slog::Value` that logs their masked form as JSON.
///
/// ## Example
/// ```ignore
/// use fieldmask::slog::IntoMaskedJson;
///
/// info!(logger, "request"; "body" => payload.into_masked_json(&policy));
/// ```
pub trait IntoMaskedJson: ToValue {
    /// Masks `self` under `policy` and returns a `slog::Value` that
    /// serializes as structured JSON.
    fn into_masked_json(&self, policy: &MaskPolicy) -> MaskedJson {
        let masked = policy.mask(self.to_value());
        MaskedJson::new(JsonValue::from(masked))
    }
}

impl<T> IntoMaskedJson for T where T: ToValue + ?Sized {}

// Keep the conversion accessible for tests without exposing the inner JSON.
#[cfg(test)]
impl MaskedJson {
    fn json(&self) -> &JsonValue {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::IntoMaskedJson;
    use crate::masking::MaskPolicy;
    use crate::value::Value;

    #[test]
    fn into_masked_json_masks_before_logging() {
        let policy = MaskPolicy::default();
        let payload = Value::record([
            ("username", Value::string("uwantme")),
            ("password", Value::string("123456")),
        ]);
        let logged = payload.into_masked_json(&policy);
        assert_eq!(
            logged.json(),
            &json!({ "username": "uw***me", "password": "******" })
        );
    }

    #[test]
    fn into_masked_json_handles_null_payloads() {
        let policy = MaskPolicy::default();
        let logged = Value::null().into_masked_json(&policy);
        assert_eq!(logged.json(), &serde_json::Value::Null);
    }
}

// `slog` already provides `impl<V: Value> Value for &V`, so a reference impl
// here would conflict with the blanket impl.
