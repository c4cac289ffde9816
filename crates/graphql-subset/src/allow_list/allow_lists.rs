use crate::allow_list::ArgumentEntry;
use crate::allow_list::FieldEntry;
use indexmap::IndexMap;

/// The set of fields the pruner may keep, grouped by the name of the type
/// that declares them. Insertion order is preserved and duplicate entries are
/// harmless, so building the list never needs to deduplicate.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldAllowList {
    entries: IndexMap<String, Vec<FieldEntry>>,
}
impl FieldAllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, entry: FieldEntry) {
        self.entries
            .entry(entry.parent_type_name.clone())
            .or_default()
            .push(entry);
    }

    /// Mark a type as retained without retaining any of its fields. Used for
    /// selections (like `__typename`) that prove a type is reached but touch
    /// nothing declared on it.
    pub(crate) fn insert_type(&mut self, type_name: &str) {
        self.entries.entry(type_name.to_string()).or_default();
    }

    /// Whether any field was retained for the given type. Pass 1 of the
    /// pruner keys type retention on exactly this.
    pub fn contains_type(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    pub fn allows_field(&self, type_name: &str, field_name: &str) -> bool {
        self.entries.get(type_name).is_some_and(|entries| {
            entries.iter().any(|entry| entry.field_name == field_name)
        })
    }

    pub fn entries(&self, type_name: &str) -> &[FieldEntry] {
        self.entries.get(type_name).map_or(&[], Vec::as_slice)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// The set of field arguments the pruner may keep, grouped by the name of
/// the type declaring the owning field.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ArgumentAllowList {
    entries: IndexMap<String, Vec<ArgumentEntry>>,
}
impl ArgumentAllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, entry: ArgumentEntry) {
        self.entries
            .entry(entry.parent_type_name.clone())
            .or_default()
            .push(entry);
    }

    /// Whether the named argument was retained for `type_name.field_name`.
    /// Both the owning field and the argument name must match.
    pub fn allows_argument(
        &self,
        type_name: &str,
        field_name: &str,
        argument_name: &str,
    ) -> bool {
        self.entries.get(type_name).is_some_and(|entries| {
            entries.iter().any(|entry| {
                entry.field_name == field_name
                    && entry.argument_name == argument_name
            })
        })
    }

    pub fn entries(&self, type_name: &str) -> &[ArgumentEntry] {
        self.entries.get(type_name).map_or(&[], Vec::as_slice)
    }
}
