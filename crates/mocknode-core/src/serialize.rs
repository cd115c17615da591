//! JSON helpers for the wire boundary.
//!
//! This module is format-level only: it turns text into values and back.
//! Field naming and defaults belong to `codec`.

use crate::{
    input::{PartialInput, RawValue},
    record::Record,
};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{DeserializeOwned, Error as _},
    ser::Error as _,
};
use thiserror::Error as ThisError;

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("deserialize error: {0}")]
    Deserialize(String),

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Render a value as compact JSON.
pub fn to_json_string<T>(value: &T) -> Result<String, SerializeError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Parse a JSON document.
pub fn from_json_str<T>(json: &str) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(json).map_err(|e| SerializeError::Deserialize(e.to_string()))
}

/// Serialize a record in its wire shape.
///
/// Generated `Serialize` impls delegate here so every format sees the same
/// keys as `Record::to_wire`.
pub fn serialize_wire<R, S>(record: &R, serializer: S) -> Result<S::Ok, S::Error>
where
    R: Record,
    S: Serializer,
{
    let wire = record.to_wire().map_err(S::Error::custom)?;

    wire.serialize(serializer)
}

/// Deserialize a record from any object-shaped document, wire or internal
/// naming, filling absent fields from their defaults. `null` reads as an
/// empty document, the same as `Record::from_wire_json`.
pub fn deserialize_wire<'de, R, D>(deserializer: D) -> Result<R, D::Error>
where
    R: Record,
    D: Deserializer<'de>,
{
    let raw = RawValue::deserialize(deserializer)?;
    let input = PartialInput::from_value(raw).map_err(D::Error::custom)?;

    R::from_input(&input).map_err(D::Error::custom)
}
