//! Core runtime for mocknode: field definitions, partial inputs, and the
//! record codec that resolves them into fully-populated records.
//!
//! In general:
//! - a record type declares *what exists* (one `FieldDef` per field)
//! - `codec` decides *what value each field gets*
//! - `record` ties the two together behind one trait
#![warn(unreachable_pub)]

pub mod codec;
pub mod config;
pub mod error;
pub mod field;
pub mod input;
pub mod record;
pub mod serialize;

pub use error::{CodecError, CodecErrorKind};

///
/// Prelude
///
/// Domain vocabulary only: the types a record declaration and its callers
/// need to name.
///

pub mod prelude {
    pub use crate::{
        codec::{Resolver, WireWriter},
        config::{AmbiguityPolicy, CodecConfig},
        error::CodecError,
        field::{DefaultPolicy, FieldDef, FieldKey, FieldModel, FieldSet},
        input::{PartialInput, RawValue, WireObject},
        record::Record,
    };
}
