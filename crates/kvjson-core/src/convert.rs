//! Infallible JSON text conversions.
//!
//! These wrap `serde_json` and substitute a default instead of returning an
//! error: [`serialize`] yields `""` and [`deserialize`] yields
//! [`Value::Null`]. The empty string is not valid JSON, so a value that failed
//! to encode reads back as `null`.
//!
//! All reads go through [`decode`], which parses floats exactly and has no
//! nesting limit, so anything [`serialize`] writes decodes to an equal value.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Encodes `value` as JSON text, or returns an empty string if it cannot be
/// represented (e.g. a map with non-string keys, or a `Serialize` impl that
/// errors).
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "value is not JSON-representable, storing empty text");
            String::new()
        }
    }
}

/// Parses `text` as a single JSON document into `T`.
///
/// Deeply nested input grows the stack on the heap instead of hitting
/// serde_json's depth limit. Trailing non-whitespace is an error.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Decodes stored text into a JSON value.
///
/// `None` (the key was unset) and malformed text both yield [`Value::Null`].
pub fn deserialize(text: Option<&str>) -> Value {
    let Some(text) = text else {
        return Value::Null;
    };
    match decode(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, len = text.len(), "stored text is not valid JSON");
            Value::Null
        }
    }
}

/// Typed variant of [`deserialize`].
///
/// Returns `None` for absent text, malformed JSON, or JSON whose shape does
/// not match `T`.
pub fn deserialize_as<T: DeserializeOwned>(text: Option<&str>) -> Option<T> {
    let text = text?;
    match decode(text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(
                error = %e,
                target_type = std::any::type_name::<T>(),
                "stored text does not decode to the requested type"
            );
            None
        }
    }
}
