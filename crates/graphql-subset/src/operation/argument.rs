use crate::value::Value;

/// One `name: value` argument occurrence on a selected field.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}
