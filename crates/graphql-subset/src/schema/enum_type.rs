use crate::ast;
use crate::schema::DirectiveAnnotation;

/// An enum type defined within a schema document. Pruning keeps or drops enum
/// types whole; individual values are never filtered.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub values: Vec<EnumValue>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
}

impl EnumType {
    pub(crate) fn from_ast(ast_type: &ast::schema::EnumType) -> Self {
        Self {
            name: ast_type.name.clone(),
            description: ast_type.description.clone(),
            directives: DirectiveAnnotation::from_ast_list(&ast_type.directives),
            values: ast_type.values.iter().map(|value| EnumValue {
                name: value.name.clone(),
                description: value.description.clone(),
                directives: DirectiveAnnotation::from_ast_list(&value.directives),
            }).collect(),
        }
    }
}
