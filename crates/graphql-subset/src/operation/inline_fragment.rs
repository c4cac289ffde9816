use crate::ast;
use crate::error::ExtractError;
use crate::operation::Selection;

/// An inline fragment occurrence. A `type_condition` of `None` means the
/// fragment exists only to attach directives and does not narrow the type.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub selection_set: Vec<Selection>,
}
impl InlineFragment {
    pub(crate) fn from_ast(
        ast_fragment: ast::operation::InlineFragment,
    ) -> Result<Self, ExtractError> {
        let type_condition = ast_fragment.type_condition.map(|condition| {
            let ast::operation::TypeCondition::On(type_name) = condition;
            type_name
        });
        Ok(Self {
            type_condition,
            selection_set: Selection::from_ast_set(ast_fragment.selection_set)?,
        })
    }
}
