use crate::{error::CodecError, input::PartialInput};
use std::{collections::BTreeMap, fmt, slice::Iter};

///
/// FieldKey
///
/// One of the two names a field can be found under in a partial input.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FieldKey {
    External(&'static str),
    Internal(&'static str),
}

impl FieldKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::External(name) | Self::Internal(name) => name,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External(name) => write!(f, "external name '{name}'"),
            Self::Internal(name) => write!(f, "internal name '{name}'"),
        }
    }
}

///
/// FieldModel
/// Naming metadata for one field, independent of its value type.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FieldModel {
    /// Name used by in-process consumers.
    pub name: &'static str,
    /// Name used on the wire.
    pub wire_name: &'static str,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, wire_name: &'static str) -> Self {
        Self { name, wire_name }
    }

    #[must_use]
    pub const fn internal(self) -> FieldKey {
        FieldKey::Internal(self.name)
    }

    #[must_use]
    pub const fn external(self) -> FieldKey {
        FieldKey::External(self.wire_name)
    }
}

///
/// DefaultPolicy
///
/// How an absent field gets its value.
///
/// `Computed` receives the raw value seen before default substitution, which
/// for an absent field is `None`; it must return a value for every input.
///

#[derive(Clone, Debug)]
pub enum DefaultPolicy<T> {
    Constant(T),
    Computed(fn(Option<T>) -> T),
}

impl<T: Clone> DefaultPolicy<T> {
    /// Apply the policy to the raw value seen for the field.
    ///
    /// A constant is cloned on every call, so two records never share a
    /// default container.
    pub fn apply(&self, raw: Option<T>) -> T {
        match self {
            Self::Constant(value) => raw.unwrap_or_else(|| value.clone()),
            Self::Computed(compute) => compute(raw),
        }
    }
}

///
/// FieldDef
/// One declared field: its two names plus its default policy.
///

#[derive(Clone, Debug)]
pub struct FieldDef<T> {
    model: FieldModel,
    default: DefaultPolicy<T>,
}

impl<T> FieldDef<T> {
    #[must_use]
    pub const fn new(model: FieldModel, default: DefaultPolicy<T>) -> Self {
        Self { model, default }
    }

    #[must_use]
    pub const fn model(&self) -> FieldModel {
        self.model
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.model.name
    }

    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        self.model.wire_name
    }

    #[must_use]
    pub const fn default_policy(&self) -> &DefaultPolicy<T> {
        &self.default
    }
}

///
/// FieldSet
///
/// The validated field list of one record type.
///
/// - internal names are unique
/// - wire names are unique
/// - a key string identifies at most one field, so one field's internal name
///   may not reappear as another field's wire name
///

#[derive(Clone, Copy, Debug)]
pub struct FieldSet {
    record: &'static str,
    fields: &'static [FieldModel],
}

impl FieldSet {
    pub fn new(record: &'static str, fields: &'static [FieldModel]) -> Result<Self, CodecError> {
        let mut owners: BTreeMap<&'static str, usize> = BTreeMap::new();

        for (index, field) in fields.iter().enumerate() {
            for name in [field.name, field.wire_name] {
                // a field may reuse its own name as its wire name
                let prev = owners.insert(name, index);
                if prev.is_some_and(|prev| prev != index) {
                    return Err(CodecError::DuplicateFieldName { record, name });
                }
            }
        }

        Ok(Self { record, fields })
    }

    #[must_use]
    pub const fn record(&self) -> &'static str {
        self.record
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // get
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn get_by_wire_name(&self, wire_name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }

    pub fn iter(&self) -> Iter<'static, FieldModel> {
        self.fields.iter()
    }

    /// Whether `key` is the internal or wire name of any field.
    #[must_use]
    pub fn claims(&self, key: &str) -> bool {
        self.iter().any(|f| f.name == key || f.wire_name == key)
    }

    /// Input keys that name no field, in input order.
    pub fn unclaimed_keys<'a>(&'a self, input: &'a PartialInput) -> impl Iterator<Item = &'a str> {
        input.keys().filter(move |key| !self.claims(key))
    }
}

impl IntoIterator for &FieldSet {
    type Item = &'static FieldModel;
    type IntoIter = Iter<'static, FieldModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecErrorKind;

    fn or_minus_one(raw: Option<i64>) -> i64 {
        raw.unwrap_or(-1)
    }

    #[test]
    fn constant_default_is_cloned_per_call() {
        let policy = DefaultPolicy::Constant(vec![1u8, 2, 3]);

        let first = policy.apply(None);
        let second = policy.apply(None);

        assert_eq!(first, second);
        assert_ne!(
            first.as_ptr(),
            second.as_ptr(),
            "constant defaults must not share an allocation"
        );
    }

    #[test]
    fn computed_default_sees_absent_sentinel() {
        let policy = DefaultPolicy::Computed(or_minus_one);

        assert_eq!(policy.apply(None), -1);
        assert_eq!(policy.apply(Some(4)), 4);
    }

    #[test]
    fn field_set_accepts_shared_name_within_one_field() {
        static FIELDS: [FieldModel; 2] = [FieldModel::new("id", "id"), FieldModel::new("a", "A")];

        let set = FieldSet::new("test::Shared", &FIELDS).expect("field set should validate");

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("a").map(|f| f.wire_name), Some("A"));
        assert_eq!(set.get_by_wire_name("id").map(|f| f.name), Some("id"));
    }

    #[test]
    fn unclaimed_keys_skip_both_names() {
        static FIELDS: [FieldModel; 2] = [
            FieldModel::new("sector_size", "SectorSize"),
            FieldModel::new("owner", "Owner"),
        ];
        let set = FieldSet::new("test::Claims", &FIELDS).expect("field set should validate");
        let input = PartialInput::new()
            .with("sectorSize", 4096)
            .with("SectorSize", 2048)
            .with("owner", "t01001")
            .with("peer", "0");

        assert!(set.claims("Owner"));
        assert!(!set.claims("sectorSize"));
        assert_eq!(
            set.unclaimed_keys(&input).collect::<Vec<_>>(),
            vec!["sectorSize", "peer"]
        );
        assert_eq!(
            set.iter().map(|f| f.wire_name).collect::<Vec<_>>(),
            vec!["SectorSize", "Owner"]
        );
    }

    #[test]
    fn field_set_rejects_duplicate_internal_name() {
        static FIELDS: [FieldModel; 2] = [FieldModel::new("a", "A"), FieldModel::new("a", "B")];

        let err = FieldSet::new("test::Dup", &FIELDS).expect_err("duplicate must be rejected");

        assert_eq!(err.kind(), CodecErrorKind::DuplicateFieldName);
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn field_set_rejects_duplicate_wire_name() {
        static FIELDS: [FieldModel; 2] = [FieldModel::new("a", "A"), FieldModel::new("b", "A")];

        let err = FieldSet::new("test::Dup", &FIELDS).expect_err("duplicate must be rejected");

        assert!(matches!(
            err,
            CodecError::DuplicateFieldName { name: "A", .. }
        ));
    }

    #[test]
    fn field_set_rejects_cross_field_key_collision() {
        static FIELDS: [FieldModel; 2] = [FieldModel::new("a", "b"), FieldModel::new("b", "B")];

        let err = FieldSet::new("test::Cross", &FIELDS).expect_err("collision must be rejected");

        assert!(matches!(
            err,
            CodecError::DuplicateFieldName { name: "b", .. }
        ));
    }
}
