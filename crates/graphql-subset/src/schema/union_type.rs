use crate::ast;
use crate::schema::DirectiveAnnotation;

/// A union type defined within a schema document.
///
/// `members` retains the declaration order of the union's member names, so a
/// pruned union keeps its surviving members in their original order.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub members: Vec<String>,
}
impl UnionType {
    pub(crate) fn from_ast(ast_type: &ast::schema::UnionType) -> Self {
        Self {
            name: ast_type.name.clone(),
            description: ast_type.description.clone(),
            directives: DirectiveAnnotation::from_ast_list(&ast_type.directives),
            members: ast_type.types.clone(),
        }
    }
}
