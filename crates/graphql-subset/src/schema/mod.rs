mod argument;
mod directive_annotation;
mod directive_definition;
mod document;
mod enum_type;
mod field;
mod input_field;
mod input_object_type;
mod interface_type;
mod object_type;
mod scalar_type;
mod schema_definition;
mod to_ast;
mod type_definition;
mod type_ref;
mod union_type;

pub use argument::Argument;
pub use directive_annotation::DirectiveAnnotation;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use document::Definition;
pub use document::SchemaDocument;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use schema_definition::SchemaDefinition;
pub use type_definition::TypeDefinition;
pub use type_ref::TypeRef;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
