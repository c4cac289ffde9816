//! The printing half of the parse/print boundary: conversions from the
//! engine's schema model back into `graphql_parser` nodes, so the standard
//! printer can render SDL text.

use crate::ast;
use crate::schema::Argument;
use crate::schema::Definition;
use crate::schema::DirectiveAnnotation;
use crate::schema::DirectiveDefinition;
use crate::schema::EnumType;
use crate::schema::Field;
use crate::schema::InputField;
use crate::schema::InputObjectType;
use crate::schema::InterfaceType;
use crate::schema::ObjectType;
use crate::schema::ScalarType;
use crate::schema::SchemaDefinition;
use crate::schema::SchemaDocument;
use crate::schema::TypeDefinition;
use crate::schema::UnionType;
use graphql_parser::Pos;

impl SchemaDocument {
    /// Print this document back to SDL text with `graphql_parser`'s standard
    /// printer. Output depends only on the document's contents, so identical
    /// documents always print identically.
    pub fn to_sdl(&self) -> String {
        format!("{}", self.to_ast())
    }

    pub(crate) fn to_ast(&self) -> ast::schema::Document {
        ast::schema::Document {
            definitions: self.definitions.iter().map(|def| match def {
                Definition::Schema(schema_def) =>
                    ast::schema::Definition::SchemaDefinition(schema_def.to_ast()),

                Definition::Type(type_def) =>
                    ast::schema::Definition::TypeDefinition(type_def.to_ast()),

                Definition::Directive(directive_def) =>
                    ast::schema::Definition::DirectiveDefinition(directive_def.to_ast()),
            }).collect(),
        }
    }
}

impl SchemaDefinition {
    pub(crate) fn to_ast(&self) -> ast::schema::SchemaDefinition {
        ast::schema::SchemaDefinition {
            position: Pos::default(),
            directives: directives_to_ast(&self.directives),
            query: self.query.clone(),
            mutation: self.mutation.clone(),
            subscription: self.subscription.clone(),
        }
    }
}

impl TypeDefinition {
    pub(crate) fn to_ast(&self) -> ast::schema::TypeDefinition {
        match self {
            Self::Object(object_type) =>
                ast::schema::TypeDefinition::Object(object_type.to_ast()),

            Self::Interface(interface_type) =>
                ast::schema::TypeDefinition::Interface(interface_type.to_ast()),

            Self::Union(union_type) =>
                ast::schema::TypeDefinition::Union(union_type.to_ast()),

            Self::Enum(enum_type) =>
                ast::schema::TypeDefinition::Enum(enum_type.to_ast()),

            Self::Scalar(scalar_type) =>
                ast::schema::TypeDefinition::Scalar(scalar_type.to_ast()),

            Self::InputObject(input_object_type) =>
                ast::schema::TypeDefinition::InputObject(input_object_type.to_ast()),
        }
    }
}

impl ObjectType {
    pub(crate) fn to_ast(&self) -> ast::schema::ObjectType {
        ast::schema::ObjectType {
            position: Pos::default(),
            description: self.description.clone(),
            name: self.name.clone(),
            implements_interfaces: self.implements_interfaces.clone(),
            directives: directives_to_ast(&self.directives),
            fields: self.fields.iter().map(Field::to_ast).collect(),
        }
    }
}

impl InterfaceType {
    pub(crate) fn to_ast(&self) -> ast::schema::InterfaceType {
        ast::schema::InterfaceType {
            position: Pos::default(),
            description: self.description.clone(),
            name: self.name.clone(),
            implements_interfaces: self.implements_interfaces.clone(),
            directives: directives_to_ast(&self.directives),
            fields: self.fields.iter().map(Field::to_ast).collect(),
        }
    }
}

impl UnionType {
    pub(crate) fn to_ast(&self) -> ast::schema::UnionType {
        ast::schema::UnionType {
            position: Pos::default(),
            description: self.description.clone(),
            name: self.name.clone(),
            directives: directives_to_ast(&self.directives),
            types: self.members.clone(),
        }
    }
}

impl EnumType {
    pub(crate) fn to_ast(&self) -> ast::schema::EnumType {
        ast::schema::EnumType {
            position: Pos::default(),
            description: self.description.clone(),
            name: self.name.clone(),
            directives: directives_to_ast(&self.directives),
            values: self.values.iter().map(|value| ast::schema::EnumValue {
                position: Pos::default(),
                description: value.description.clone(),
                name: value.name.clone(),
                directives: directives_to_ast(&value.directives),
            }).collect(),
        }
    }
}

impl ScalarType {
    pub(crate) fn to_ast(&self) -> ast::schema::ScalarType {
        ast::schema::ScalarType {
            position: Pos::default(),
            description: self.description.clone(),
            name: self.name.clone(),
            directives: directives_to_ast(&self.directives),
        }
    }
}

impl InputObjectType {
    pub(crate) fn to_ast(&self) -> ast::schema::InputObjectType {
        ast::schema::InputObjectType {
            position: Pos::default(),
            description: self.description.clone(),
            name: self.name.clone(),
            directives: directives_to_ast(&self.directives),
            fields: self.fields.iter().map(InputField::to_ast).collect(),
        }
    }
}

impl Field {
    pub(crate) fn to_ast(&self) -> ast::schema::Field {
        ast::schema::Field {
            position: Pos::default(),
            description: self.description.clone(),
            name: self.name.clone(),
            arguments: self.arguments.iter().map(Argument::to_ast).collect(),
            field_type: self.type_ref.to_ast(),
            directives: directives_to_ast(&self.directives),
        }
    }
}

impl Argument {
    pub(crate) fn to_ast(&self) -> ast::schema::InputValue {
        ast::schema::InputValue {
            position: Pos::default(),
            description: self.description.clone(),
            name: self.name.clone(),
            value_type: self.type_ref.to_ast(),
            default_value: self.default_value.as_ref().map(|value| value.to_ast()),
            directives: directives_to_ast(&self.directives),
        }
    }
}

impl InputField {
    pub(crate) fn to_ast(&self) -> ast::schema::InputValue {
        ast::schema::InputValue {
            position: Pos::default(),
            description: self.description.clone(),
            name: self.name.clone(),
            value_type: self.type_ref.to_ast(),
            default_value: self.default_value.as_ref().map(|value| value.to_ast()),
            directives: directives_to_ast(&self.directives),
        }
    }
}

impl DirectiveDefinition {
    pub(crate) fn to_ast(&self) -> ast::schema::DirectiveDefinition {
        ast::schema::DirectiveDefinition {
            position: Pos::default(),
            description: self.description.clone(),
            name: self.name.clone(),
            arguments: self.arguments.iter().map(Argument::to_ast).collect(),
            repeatable: self.repeatable,
            locations: self.locations.iter()
                .map(|location| location.to_ast())
                .collect(),
        }
    }
}

impl DirectiveAnnotation {
    pub(crate) fn to_ast(&self) -> ast::schema::Directive {
        ast::schema::Directive {
            position: Pos::default(),
            name: self.name.clone(),
            arguments: self.arguments.iter()
                .map(|(name, value)| (name.clone(), value.to_ast()))
                .collect(),
        }
    }
}

fn directives_to_ast(
    directives: &[DirectiveAnnotation],
) -> Vec<ast::schema::Directive> {
    directives.iter().map(DirectiveAnnotation::to_ast).collect()
}
