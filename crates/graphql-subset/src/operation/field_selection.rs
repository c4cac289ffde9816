use crate::ast;
use crate::error::ExtractError;
use crate::operation::Argument;
use crate::operation::Selection;
use crate::value::Value;

/// A field occurrence within a selection set.
///
/// Aliases and directives on the selection are dropped by the parse adapter;
/// neither affects which schema names the query touches.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub selection_set: Vec<Selection>,
}
impl FieldSelection {
    pub(crate) fn from_ast(
        ast_field: ast::operation::Field,
    ) -> Result<Self, ExtractError> {
        Ok(Self {
            name: ast_field.name,
            arguments: ast_field.arguments.into_iter()
                .map(|(name, value)| Argument {
                    name,
                    value: Value::from_ast(&value),
                })
                .collect(),
            selection_set: Selection::from_ast_set(ast_field.selection_set)?,
        })
    }
}
