//! TOML-backed simulator configuration.
//!
//! A document carries codec options under `[codec]` and one seed table per
//! mocked record under `[records.<name>]`:
//!
//! ```toml
//! [codec]
//! ambiguous_input = "reject"
//!
//! [records.miner_info]
//! owner = "t01001"
//! SectorSize = 2048
//! ```
//!
//! Seed tables are handed to the record codec unchanged, so they may use
//! internal names, wire names, or both.

use mocknode_core::{
    CodecError,
    config::CodecConfig,
    input::PartialInput,
    record::Record,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

///
/// SimulatorConfig
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SimulatorConfig {
    #[serde(default)]
    pub codec: CodecConfig,

    #[serde(default)]
    pub records: BTreeMap<String, toml::Table>,
}

impl SimulatorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;

        debug!(
            path = %path.display(),
            records = config.records.len(),
            ambiguous_input = ?config.codec.ambiguous_input,
            "loaded simulator config"
        );

        Ok(config)
    }

    /// Seed for the named record; an absent table is an empty seed.
    pub fn record_input(&self, name: &str) -> Result<PartialInput, ConfigError> {
        match self.records.get(name) {
            Some(table) => Ok(PartialInput::from_serialize(table)?),
            None => Ok(PartialInput::new()),
        }
    }

    /// Build the named record from its seed table under this config's codec
    /// options.
    pub fn construct<R: Record>(&self, name: &str) -> Result<R, ConfigError> {
        let input = self.record_input(name)?;

        Ok(R::from_input_with(&input, &self.codec)?)
    }

    #[must_use]
    pub fn record_names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

///
/// TESTS
///
