//! Field resolution and wire rendering.
//!
//! Resolution is a pure, single-pass mapping from a partial input to one
//! typed value per field. Fields are resolved independently: a default never
//! sees another field's resolved value, only the raw input.


use crate::{
    config::{AmbiguityPolicy, CodecConfig},
    error::CodecError,
    field::{DefaultPolicy, FieldDef, FieldKey, FieldModel},
    input::{PartialInput, RawValue, WireObject},
};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    any::Any,
    panic::{AssertUnwindSafe, catch_unwind},
};

///
/// Lookup
/// Outcome of searching a partial input for one field.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lookup<'a> {
    Absent,
    Found {
        key: FieldKey,
        value: &'a RawValue,
    },
    /// Both names are present with different values.
    Conflict {
        external: &'a RawValue,
        internal: &'a RawValue,
    },
}

/// Search `input` for a field: wire name first, then internal name.
///
/// Equal values under both names are not a conflict.
#[must_use]
pub fn lookup(input: &PartialInput, model: FieldModel) -> Lookup<'_> {
    let external = input.get(model.wire_name);
    let internal = if model.name == model.wire_name {
        None
    } else {
        input.get(model.name)
    };

    match (external, internal) {
        (Some(external), Some(internal)) if external != internal => {
            Lookup::Conflict { external, internal }
        }
        (Some(value), _) => Lookup::Found {
            key: model.external(),
            value,
        },
        (None, Some(value)) => Lookup::Found {
            key: model.internal(),
            value,
        },
        (None, None) => Lookup::Absent,
    }
}

///
/// Resolver
///
/// Resolves the fields of one record against one partial input.
/// Holds only borrows; build one per construction call.
///

#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    record: &'static str,
    input: &'a PartialInput,
    config: &'a CodecConfig,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new(
        record: &'static str,
        input: &'a PartialInput,
        config: &'a CodecConfig,
    ) -> Self {
        Self {
            record,
            input,
            config,
        }
    }

    #[must_use]
    pub const fn record(&self) -> &'static str {
        self.record
    }

    /// Find the raw value for a field, applying the ambiguity policy.
    pub fn find(&self, model: FieldModel) -> Result<Option<(FieldKey, &'a RawValue)>, CodecError> {
        match lookup(self.input, model) {
            Lookup::Absent => Ok(None),
            Lookup::Found { key, value } => Ok(Some((key, value))),
            Lookup::Conflict { external, .. } => match self.config.ambiguous_input {
                AmbiguityPolicy::PreferExternal => {
                    tracing::warn!(
                        record = self.record,
                        field = model.name,
                        wire_name = model.wire_name,
                        "conflicting values for one field; wire name wins"
                    );

                    Ok(Some((model.external(), external)))
                }
                AmbiguityPolicy::Reject => Err(CodecError::AmbiguousInput {
                    record: self.record,
                    field: model.name,
                    wire_name: model.wire_name,
                }),
            },
        }
    }

    /// Resolve one field to its final value.
    ///
    /// A supplied value is decoded verbatim into `T`; an absent one is filled
    /// by the field's default policy.
    pub fn resolve<T>(&self, def: &FieldDef<T>) -> Result<T, CodecError>
    where
        T: Clone + DeserializeOwned,
    {
        let model = def.model();

        match self.find(model)? {
            Some((key, raw)) => T::deserialize(raw).map_err(|e| CodecError::FieldDecode {
                record: self.record,
                field: model.name,
                key,
                message: e.to_string(),
            }),
            None => self.apply_default(model, def.default_policy()),
        }
    }

    fn apply_default<T: Clone>(
        &self,
        model: FieldModel,
        policy: &DefaultPolicy<T>,
    ) -> Result<T, CodecError> {
        tracing::trace!(
            record = self.record,
            field = model.name,
            "field absent from input; applying default policy"
        );

        catch_unwind(AssertUnwindSafe(|| policy.apply(None))).map_err(|payload| {
            CodecError::DefaultPolicyFailure {
                record: self.record,
                field: model.name,
                message: panic_message(payload.as_ref()),
            }
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "default policy panicked".to_string()
    }
}

///
/// Naming
/// Which of a field's two names keys the rendered object.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Naming {
    External,
    Internal,
}

impl Naming {
    #[must_use]
    pub const fn key(self, model: FieldModel) -> &'static str {
        match self {
            Self::External => model.wire_name,
            Self::Internal => model.name,
        }
    }
}

///
/// WireWriter
///
/// Renders a fully-populated record as an object.
/// No default substitution happens here; every written field appears,
/// whatever its value.
///

#[derive(Debug)]
pub struct WireWriter {
    record: &'static str,
    naming: Naming,
    object: WireObject,
}

impl WireWriter {
    #[must_use]
    pub fn new(record: &'static str, naming: Naming) -> Self {
        Self {
            record,
            naming,
            object: WireObject::new(),
        }
    }

    #[must_use]
    pub const fn naming(&self) -> Naming {
        self.naming
    }

    pub fn write<T>(&mut self, model: FieldModel, value: &T) -> Result<(), CodecError>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_value(value).map_err(|e| CodecError::FieldEncode {
            record: self.record,
            field: model.name,
            message: e.to_string(),
        })?;

        self.object.insert(self.naming.key(model).to_string(), raw);

        Ok(())
    }

    #[must_use]
    pub fn finish(self) -> WireObject {
        self.object
    }
}
