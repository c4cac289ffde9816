use crate::ast;
use crate::schema::Argument;
use crate::schema::DirectiveAnnotation;
use crate::schema::TypeRef;

/// A field defined on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<Argument>,
    pub type_ref: TypeRef,
    pub directives: Vec<DirectiveAnnotation>,
}
impl Field {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|argument| argument.name == name)
    }

    pub(crate) fn from_ast(ast_field: &ast::schema::Field) -> Self {
        Self {
            name: ast_field.name.clone(),
            description: ast_field.description.clone(),
            arguments: ast_field.arguments.iter().map(Argument::from_ast).collect(),
            type_ref: TypeRef::from_ast(&ast_field.field_type),
            directives: DirectiveAnnotation::from_ast_list(&ast_field.directives),
        }
    }
}
