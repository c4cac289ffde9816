use crate::ast;
use crate::schema::DirectiveAnnotation;
use crate::schema::Field;

/// An object type defined within a schema document.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub implements_interfaces: Vec<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<Field>,
}
impl ObjectType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub(crate) fn from_ast(ast_type: &ast::schema::ObjectType) -> Self {
        Self {
            name: ast_type.name.clone(),
            description: ast_type.description.clone(),
            implements_interfaces: ast_type.implements_interfaces.clone(),
            directives: DirectiveAnnotation::from_ast_list(&ast_type.directives),
            fields: ast_type.fields.iter().map(Field::from_ast).collect(),
        }
    }
}
