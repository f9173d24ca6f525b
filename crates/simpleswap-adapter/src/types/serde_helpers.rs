/*
[INPUT]:  Loosely typed upstream JSON values (null, empty strings, numbers as strings)
[OUTPUT]: Field-level serde adapters
[POS]:    Data layer - shared deserialization helpers
[UPDATE]: When upstream starts sending new loosely typed fields
*/

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn deserialize_optional_decimal<'de, D>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    if let Some(raw) = value.as_str() {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        return Decimal::from_str(raw.trim())
            .map(Some)
            .map_err(serde::de::Error::custom);
    }

    if value.is_number() {
        return Decimal::from_str(&value.to_string())
            .map(Some)
            .map_err(serde::de::Error::custom);
    }

    Err(serde::de::Error::custom("invalid decimal value"))
}

pub(crate) fn serialize_optional_decimal<S>(
    value: &Option<Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(decimal) => serializer.serialize_str(&decimal.to_string()),
        None => serializer.serialize_none(),
    }
}
