use crate::ast;
use crate::schema::DirectiveAnnotation;

/// A custom scalar type defined within a schema document.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
}
impl ScalarType {
    pub(crate) fn from_ast(ast_type: &ast::schema::ScalarType) -> Self {
        Self {
            name: ast_type.name.clone(),
            description: ast_type.description.clone(),
            directives: DirectiveAnnotation::from_ast_list(&ast_type.directives),
        }
    }
}
