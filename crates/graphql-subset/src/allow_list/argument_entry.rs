/// One retained argument: `parent_type_name.field_name(argument_name:)`,
/// plus the argument's resolved (unwrapped) type name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ArgumentEntry {
    pub parent_type_name: String,
    pub field_name: String,
    pub argument_name: String,
    pub argument_type_name: String,
}
