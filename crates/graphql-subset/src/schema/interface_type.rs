use crate::ast;
use crate::schema::DirectiveAnnotation;
use crate::schema::Field;

/// An interface type defined within a schema document.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub implements_interfaces: Vec<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<Field>,
}
impl InterfaceType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub(crate) fn from_ast(ast_type: &ast::schema::InterfaceType) -> Self {
        Self {
            name: ast_type.name.clone(),
            description: ast_type.description.clone(),
            implements_interfaces: ast_type.implements_interfaces.clone(),
            directives: DirectiveAnnotation::from_ast_list(&ast_type.directives),
            fields: ast_type.fields.iter().map(Field::from_ast).collect(),
        }
    }
}
