use crate::ast;
use crate::value::Value;

/// A directive applied to a definition, field, argument, input field, or enum
/// value (e.g. `@deprecated(reason: "...")`). Annotations ride through
/// pruning untouched on every node that survives.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub name: String,
    pub arguments: Vec<(String, Value)>,
}
impl DirectiveAnnotation {
    pub(crate) fn from_ast(ast_directive: &ast::schema::Directive) -> Self {
        Self {
            name: ast_directive.name.clone(),
            arguments: ast_directive.arguments.iter()
                .map(|(name, value)| (name.clone(), Value::from_ast(value)))
                .collect(),
        }
    }

    pub(crate) fn from_ast_list(
        ast_directives: &[ast::schema::Directive],
    ) -> Vec<Self> {
        ast_directives.iter().map(Self::from_ast).collect()
    }
}
