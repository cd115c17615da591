use crate::{field::FieldKey, serialize::SerializeError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// CodecError
///
/// Failure while declaring, constructing, or rendering a record.
/// Every variant carries the record path so callers juggling several record
/// types can tell them apart without inspecting the message.
///

#[derive(Debug, ThisError)]
pub enum CodecError {
    #[error("record '{record}' declares the name '{name}' more than once")]
    DuplicateFieldName {
        record: &'static str,
        name: &'static str,
    },

    #[error(
        "record '{record}' field '{field}' has conflicting values under '{field}' and '{wire_name}'"
    )]
    AmbiguousInput {
        record: &'static str,
        field: &'static str,
        wire_name: &'static str,
    },

    #[error("record '{record}' field '{field}' default policy failed: {message}")]
    DefaultPolicyFailure {
        record: &'static str,
        field: &'static str,
        message: String,
    },

    #[error("record '{record}' field '{field}' cannot decode value under {key}: {message}")]
    FieldDecode {
        record: &'static str,
        field: &'static str,
        key: FieldKey,
        message: String,
    },

    #[error("record '{record}' field '{field}' cannot be encoded: {message}")]
    FieldEncode {
        record: &'static str,
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

impl CodecError {
    /// Return a stable error kind independent of message text.
    #[must_use]
    pub const fn kind(&self) -> CodecErrorKind {
        match self {
            Self::DuplicateFieldName { .. } => CodecErrorKind::DuplicateFieldName,
            Self::AmbiguousInput { .. } => CodecErrorKind::AmbiguousInput,
            Self::DefaultPolicyFailure { .. } => CodecErrorKind::DefaultPolicyFailure,
            Self::FieldDecode { .. } => CodecErrorKind::FieldDecode,
            Self::FieldEncode { .. } => CodecErrorKind::FieldEncode,
            Self::Serialize(_) => CodecErrorKind::Serialize,
        }
    }

    /// Internal name of the field the error is about, if any.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::AmbiguousInput { field, .. }
            | Self::DefaultPolicyFailure { field, .. }
            | Self::FieldDecode { field, .. }
            | Self::FieldEncode { field, .. } => Some(field),
            Self::DuplicateFieldName { .. } | Self::Serialize(_) => None,
        }
    }
}

///
/// CodecErrorKind
///
/// Stable error-kind taxonomy for codec failures.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CodecErrorKind {
    DuplicateFieldName,
    AmbiguousInput,
    DefaultPolicyFailure,
    FieldDecode,
    FieldEncode,
    Serialize,
}

impl CodecErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateFieldName => "duplicate_field_name",
            Self::AmbiguousInput => "ambiguous_input",
            Self::DefaultPolicyFailure => "default_policy_failure",
            Self::FieldDecode => "field_decode",
            Self::FieldEncode => "field_encode",
            Self::Serialize => "serialize",
        }
    }
}

impl fmt::Display for CodecErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// TESTS
///
