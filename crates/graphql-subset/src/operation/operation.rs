use crate::ast;
use crate::error::ExtractError;
use crate::operation::OperationKind;
use crate::operation::Selection;

/// A single executable operation parsed from query text.
///
/// The engine works on exactly one operation per extraction; documents with
/// several operations or with named fragment definitions are rejected by
/// [`Operation::parse`].
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub selection_set: Vec<Selection>,
}
impl Operation {
    /// Parse query text into the one operation it must contain.
    pub fn parse(text: &str) -> Result<Self, ExtractError> {
        let ast_doc = graphql_parser::query::parse_query::<String>(text)
            .map_err(|err| ExtractError::QuerySyntax {
                err: err.to_string(),
            })?
            .into_static();
        Self::from_ast(ast_doc)
    }

    pub(crate) fn from_ast(
        ast_doc: ast::operation::Document,
    ) -> Result<Self, ExtractError> {
        let mut operations = vec![];
        for ast_def in ast_doc.definitions {
            match ast_def {
                ast::operation::Definition::Operation(op_def) =>
                    operations.push(op_def),

                ast::operation::Definition::Fragment(fragment_def) =>
                    return Err(ExtractError::UnsupportedFragment {
                        name: fragment_def.name,
                    }),
            }
        }

        if operations.len() > 1 {
            return Err(ExtractError::MultipleOperations {
                found: operations.len(),
            });
        }
        let Some(op_def) = operations.pop() else {
            return Err(ExtractError::MultipleOperations { found: 0 });
        };

        use ast::operation::OperationDefinition as OpDef;
        let (kind, ast_selection_set) = match op_def {
            // A bare `{ ... }` shorthand document is a query.
            OpDef::SelectionSet(selection_set) =>
                (OperationKind::Query, selection_set),

            OpDef::Query(query) =>
                (OperationKind::Query, query.selection_set),

            OpDef::Mutation(mutation) =>
                (OperationKind::Mutation, mutation.selection_set),

            OpDef::Subscription(subscription) =>
                (OperationKind::Subscription, subscription.selection_set),
        };

        Ok(Self {
            kind,
            selection_set: Selection::from_ast_set(ast_selection_set)?,
        })
    }
}
