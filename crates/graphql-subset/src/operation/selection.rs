use crate::ast;
use crate::error::ExtractError;
use crate::operation::FieldSelection;
use crate::operation::InlineFragment;

/// One entry in a selection set. Fragment spreads by name are not
/// representable; the parse adapter rejects them up front, so every consumer
/// of this enum only ever deals with fields and inline fragments.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub(crate) fn from_ast_set(
        ast_set: ast::operation::SelectionSet,
    ) -> Result<Vec<Self>, ExtractError> {
        ast_set.items.into_iter().map(Self::from_ast).collect()
    }

    fn from_ast(
        ast_selection: ast::operation::Selection,
    ) -> Result<Self, ExtractError> {
        match ast_selection {
            ast::operation::Selection::Field(field) =>
                Ok(Self::Field(FieldSelection::from_ast(field)?)),

            ast::operation::Selection::InlineFragment(fragment) =>
                Ok(Self::InlineFragment(InlineFragment::from_ast(fragment)?)),

            ast::operation::Selection::FragmentSpread(spread) =>
                Err(ExtractError::UnsupportedFragment {
                    name: spread.fragment_name,
                }),
        }
    }
}
