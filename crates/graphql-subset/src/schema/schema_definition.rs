use crate::ast;
use crate::schema::DirectiveAnnotation;

/// An explicit `schema { ... }` block binding the root operation types.
///
/// Most documents omit this block and rely on the conventional
/// `Query`/`Mutation`/`Subscription` names; when present it takes precedence
/// during root-type resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub directives: Vec<DirectiveAnnotation>,
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}
impl SchemaDefinition {
    pub(crate) fn from_ast(ast_def: &ast::schema::SchemaDefinition) -> Self {
        Self {
            directives: DirectiveAnnotation::from_ast_list(&ast_def.directives),
            query: ast_def.query.clone(),
            mutation: ast_def.mutation.clone(),
            subscription: ast_def.subscription.clone(),
        }
    }
}
