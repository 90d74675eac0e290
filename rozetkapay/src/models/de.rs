//! Lenient deserialization helpers for gateway responses.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Deserializes `null` as `T::default()`.
///
/// The gateway sends `null` for empty lists and maps; combined with
/// `#[serde(default)]` this also covers absent keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a response body that must be a JSON object.
///
/// Derived structs also accept sequences, so `[]` would otherwise decode
/// to a defaulted value.
pub(crate) fn from_object_slice<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    serde_json::from_value(Value::Object(object))
}
