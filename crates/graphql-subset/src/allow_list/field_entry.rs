/// One retained field: `parent_type_name.field_name`, plus the field's
/// resolved (unwrapped) type name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldEntry {
    pub parent_type_name: String,
    pub field_name: String,
    pub field_type_name: String,
}
