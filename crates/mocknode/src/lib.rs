//! ## Crate layout
//! - `core`: field definitions, partial inputs, the record codec, and errors.
//! - `Record` (derive): generates a record's field definitions and codec glue.
//!
//! Concrete mocked records live in their own crates (e.g. `mocknode-filecoin`)
//! and depend on this facade, the same way generated code does.

pub use mocknode_core as core;
pub use mocknode_derive::Record;

/// re-exports
///
/// generated code refers to these so record crates don't have to list serde
/// in their own Cargo.toml
pub mod __reexports {
    pub use serde;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared error type for construction and rendering.
pub use mocknode_core::CodecError as Error;

///
/// Prelude
/// the `Record` trait and derive share a name, like serde's
///

pub mod prelude {
    pub use crate::core::{
        codec::{Resolver, WireWriter},
        config::{AmbiguityPolicy, CodecConfig},
        field::{DefaultPolicy, FieldDef, FieldKey, FieldModel, FieldSet},
        input::{PartialInput, RawValue, WireObject},
        record::Record,
    };
    pub use mocknode_derive::Record;
}
