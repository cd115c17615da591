use serde::{Deserialize, Serialize};

///
/// AmbiguityPolicy
///
/// What to do when one input carries different values under a field's
/// internal and wire names.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// The wire name wins and a warning is logged.
    #[default]
    PreferExternal,
    /// Construction fails with `AmbiguousInput`.
    Reject,
}

///
/// CodecConfig
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    pub ambiguous_input: AmbiguityPolicy,
}

impl CodecConfig {
    #[must_use]
    pub const fn new(ambiguous_input: AmbiguityPolicy) -> Self {
        Self { ambiguous_input }
    }

    /// Fail construction on conflicting inputs instead of warning.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(AmbiguityPolicy::Reject)
    }
}

///
/// TESTS
///
