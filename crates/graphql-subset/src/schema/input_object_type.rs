use crate::ast;
use crate::schema::DirectiveAnnotation;
use crate::schema::InputField;

/// An input object type defined within a schema document.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<InputField>,
}
impl InputObjectType {
    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub(crate) fn from_ast(ast_type: &ast::schema::InputObjectType) -> Self {
        Self {
            name: ast_type.name.clone(),
            description: ast_type.description.clone(),
            directives: DirectiveAnnotation::from_ast_list(&ast_type.directives),
            fields: ast_type.fields.iter().map(InputField::from_ast).collect(),
        }
    }
}
