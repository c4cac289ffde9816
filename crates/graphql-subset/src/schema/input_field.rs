use crate::ast;
use crate::schema::DirectiveAnnotation;
use crate::schema::TypeRef;
use crate::value::Value;

/// A field defined on an input object type. Unlike [`Field`](crate::schema::Field),
/// input fields carry no arguments of their own.
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub name: String,
    pub description: Option<String>,
    pub type_ref: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
}
impl InputField {
    pub(crate) fn from_ast(ast_value: &ast::schema::InputValue) -> Self {
        Self {
            name: ast_value.name.clone(),
            description: ast_value.description.clone(),
            type_ref: TypeRef::from_ast(&ast_value.value_type),
            default_value: ast_value.default_value.as_ref().map(Value::from_ast),
            directives: DirectiveAnnotation::from_ast_list(&ast_value.directives),
        }
    }
}
