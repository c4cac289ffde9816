use crate::ast;
use crate::schema::EnumType;
use crate::schema::Field;
use crate::schema::InputField;
use crate::schema::InputObjectType;
use crate::schema::InterfaceType;
use crate::schema::ObjectType;
use crate::schema::ScalarType;
use crate::schema::UnionType;

/// One named type definition within a schema document.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    Scalar(ScalarType),
    InputObject(InputObjectType),
}
impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            Self::Object(object_type) => object_type.name.as_str(),
            Self::Interface(interface_type) => interface_type.name.as_str(),
            Self::Union(union_type) => union_type.name.as_str(),
            Self::Enum(enum_type) => enum_type.name.as_str(),
            Self::Scalar(scalar_type) => scalar_type.name.as_str(),
            Self::InputObject(input_object_type) => input_object_type.name.as_str(),
        }
    }

    /// Look up a selectable field. Only object and interface types carry
    /// selectable fields.
    pub fn field(&self, name: &str) -> Option<&Field> {
        match self {
            Self::Object(object_type) => object_type.field(name),
            Self::Interface(interface_type) => interface_type.field(name),
            _ => None,
        }
    }

    /// Look up an input field. Only input object types carry input fields.
    pub fn input_field(&self, name: &str) -> Option<&InputField> {
        match self {
            Self::InputObject(input_object_type) => input_object_type.field(name),
            _ => None,
        }
    }

    pub(crate) fn from_ast(ast_def: &ast::schema::TypeDefinition) -> Self {
        match ast_def {
            ast::schema::TypeDefinition::Object(object_type) =>
                Self::Object(ObjectType::from_ast(object_type)),

            ast::schema::TypeDefinition::Interface(interface_type) =>
                Self::Interface(InterfaceType::from_ast(interface_type)),

            ast::schema::TypeDefinition::Union(union_type) =>
                Self::Union(UnionType::from_ast(union_type)),

            ast::schema::TypeDefinition::Enum(enum_type) =>
                Self::Enum(EnumType::from_ast(enum_type)),

            ast::schema::TypeDefinition::Scalar(scalar_type) =>
                Self::Scalar(ScalarType::from_ast(scalar_type)),

            ast::schema::TypeDefinition::InputObject(input_object_type) =>
                Self::InputObject(InputObjectType::from_ast(input_object_type)),
        }
    }
}
