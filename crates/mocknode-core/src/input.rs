use crate::{error::CodecError, serialize::SerializeError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped field value as it arrives from a caller or off the wire.
pub type RawValue = Value;

/// JSON object keyed by field names, in insertion order.
pub type WireObject = Map<String, Value>;

///
/// PartialInput
///
/// Caller-supplied seed for one record.
///
/// Keys may be internal names, wire names, or a mixture of both. Any subset
/// of a record's fields is valid, including none. Keys that name no field are
/// carried but never read. A JSON `null` is a present value.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PartialInput {
    entries: WireObject,
}

impl PartialInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn from_object(entries: WireObject) -> Self {
        Self { entries }
    }

    /// Build an input from an arbitrary JSON value.
    ///
    /// `null` stands for "no input" and yields an empty seed; any other
    /// non-object value is rejected.
    pub fn from_value(value: RawValue) -> Result<Self, CodecError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            Value::Null => Ok(Self::new()),
            other => Err(SerializeError::NotAnObject {
                found: json_type_name(&other),
            }
            .into()),
        }
    }

    /// Parse a JSON document, typically a wire reply, into an input.
    pub fn from_json_str(json: &str) -> Result<Self, CodecError> {
        let value: RawValue = crate::serialize::from_json_str(json)?;

        Self::from_value(value)
    }

    /// Capture any serializable struct or map as an input.
    pub fn from_serialize<T>(value: &T) -> Result<Self, CodecError>
    where
        T: Serialize + ?Sized,
    {
        let value =
            serde_json::to_value(value).map_err(|e| SerializeError::Serialize(e.to_string()))?;

        Self::from_value(value)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Option<RawValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.entries.shift_remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn into_object(self) -> WireObject {
        self.entries
    }
}

impl From<WireObject> for PartialInput {
    fn from(entries: WireObject) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>> FromIterator<(K, RawValue)> for PartialInput {
    fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

///
/// TESTS
///
