use crate::{
    codec::{Naming, Resolver, WireWriter},
    config::CodecConfig,
    error::CodecError,
    field::{FieldModel, FieldSet},
    input::{PartialInput, WireObject},
    serialize,
};

///
/// Record
///
/// A mocked remote-node record built by the codec.
///
/// Implementors declare their fields and how to resolve and write them;
/// everything else (validation of the field set, construction entry points,
/// wire and internal rendering) is provided. `#[derive(Record)]` generates
/// the four required items from field attributes.
///

pub trait Record: Sized {
    /// Fully-qualified type path, used in diagnostics.
    const PATH: &'static str;

    /// Declared fields in declaration order.
    fn fields() -> &'static [FieldModel];

    /// Build the record by resolving every field through `resolver`.
    fn resolve_fields(resolver: &Resolver<'_>) -> Result<Self, CodecError>;

    /// Write every field of a fully-populated record.
    fn write_fields(&self, writer: &mut WireWriter) -> Result<(), CodecError>;

    //
    // provided
    //

    /// Validated field set; fails on duplicate names.
    fn field_set() -> Result<FieldSet, CodecError> {
        FieldSet::new(Self::PATH, Self::fields())
    }

    /// Build the record from `input`. Keys that name no field are ignored
    /// with a warning.
    fn from_input_with(input: &PartialInput, config: &CodecConfig) -> Result<Self, CodecError> {
        let fields = Self::field_set()?;
        for key in fields.unclaimed_keys(input) {
            tracing::warn!(record = Self::PATH, key, "input key names no field; ignored");
        }
        let resolver = Resolver::new(Self::PATH, input, config);

        Self::resolve_fields(&resolver)
    }

    fn from_input(input: &PartialInput) -> Result<Self, CodecError> {
        Self::from_input_with(input, &CodecConfig::default())
    }

    /// Build a record with every field at its default.
    fn with_defaults() -> Result<Self, CodecError> {
        Self::from_input(&PartialInput::new())
    }

    /// Parse a wire document and construct from it.
    fn from_wire_json(json: &str) -> Result<Self, CodecError> {
        Self::from_input(&PartialInput::from_json_str(json)?)
    }

    /// Object keyed by wire names, one entry per declared field.
    fn to_wire(&self) -> Result<WireObject, CodecError> {
        self.render(Naming::External)
    }

    /// Object keyed by internal names, one entry per declared field.
    fn to_internal(&self) -> Result<WireObject, CodecError> {
        self.render(Naming::Internal)
    }

    fn to_wire_json(&self) -> Result<String, CodecError> {
        Ok(serialize::to_json_string(&self.to_wire()?)?)
    }

    fn render(&self, naming: Naming) -> Result<WireObject, CodecError> {
        Self::field_set()?;
        let mut writer = WireWriter::new(Self::PATH, naming);
        self.write_fields(&mut writer)?;

        Ok(writer.finish())
    }
}
