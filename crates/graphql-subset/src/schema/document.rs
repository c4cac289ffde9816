use crate::ast;
use crate::error::ExtractError;
use crate::operation::OperationKind;
use crate::schema::DirectiveDefinition;
use crate::schema::ObjectType;
use crate::schema::SchemaDefinition;
use crate::schema::TypeDefinition;

/// One top-level definition within a [`SchemaDocument`].
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    Directive(DirectiveDefinition),
}

/// An in-memory schema document: the ordered list of definitions parsed from
/// an SDL string.
///
/// The document is pure data plus lookup helpers. It is assumed to be
/// self-contained (every named type reference resolves to a definition in the
/// same document) and pre-validated before it enters the engine; nothing here
/// re-checks GraphQL validation rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaDocument {
    pub definitions: Vec<Definition>,
}
impl SchemaDocument {
    /// Parse an SDL string into a schema document.
    pub fn parse(text: &str) -> Result<Self, ExtractError> {
        let ast_doc = graphql_parser::schema::parse_schema::<String>(text)
            .map_err(|err| ExtractError::SchemaSyntax {
                err: err.to_string(),
            })?
            .into_static();
        Self::from_ast(&ast_doc)
    }

    pub(crate) fn from_ast(
        ast_doc: &ast::schema::Document,
    ) -> Result<Self, ExtractError> {
        let mut definitions = Vec::with_capacity(ast_doc.definitions.len());
        for ast_def in &ast_doc.definitions {
            match ast_def {
                ast::schema::Definition::SchemaDefinition(schema_def) =>
                    definitions.push(Definition::Schema(
                        SchemaDefinition::from_ast(schema_def),
                    )),

                ast::schema::Definition::TypeDefinition(type_def) =>
                    definitions.push(Definition::Type(
                        TypeDefinition::from_ast(type_def),
                    )),

                ast::schema::Definition::DirectiveDefinition(directive_def) =>
                    definitions.push(Definition::Directive(
                        DirectiveDefinition::from_ast(directive_def),
                    )),

                ast::schema::Definition::TypeExtension(type_ext) =>
                    return Err(ExtractError::UnsupportedTypeExtension {
                        type_name: extension_type_name(type_ext).to_string(),
                    }),
            }
        }
        Ok(Self { definitions })
    }

    /// Find the type definition with the given name, if any.
    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.definitions.iter().find_map(|def| match def {
            Definition::Type(type_def) if type_def.name() == name =>
                Some(type_def),
            _ => None,
        })
    }

    /// Find the object type with the given name, if any.
    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        match self.type_definition(name) {
            Some(TypeDefinition::Object(object_type)) => Some(object_type),
            _ => None,
        }
    }

    /// The explicit `schema { ... }` block, if the document declares one.
    pub fn schema_definition(&self) -> Option<&SchemaDefinition> {
        self.definitions.iter().find_map(|def| match def {
            Definition::Schema(schema_def) => Some(schema_def),
            _ => None,
        })
    }

    /// The name of the type backing the given root operation kind: the
    /// `schema { ... }` binding when one is declared, otherwise the
    /// conventional default name for that kind.
    pub fn root_operation_type_name(&self, kind: OperationKind) -> &str {
        let bound = self.schema_definition().and_then(|schema_def| {
            match kind {
                OperationKind::Query => schema_def.query.as_deref(),
                OperationKind::Mutation => schema_def.mutation.as_deref(),
                OperationKind::Subscription => schema_def.subscription.as_deref(),
            }
        });
        bound.unwrap_or_else(|| kind.default_root_type_name())
    }
}

fn extension_type_name(type_ext: &ast::schema::TypeExtension) -> &str {
    match type_ext {
        ast::schema::TypeExtension::Scalar(ext) => ext.name.as_str(),
        ast::schema::TypeExtension::Object(ext) => ext.name.as_str(),
        ast::schema::TypeExtension::Interface(ext) => ext.name.as_str(),
        ast::schema::TypeExtension::Union(ext) => ext.name.as_str(),
        ast::schema::TypeExtension::Enum(ext) => ext.name.as_str(),
        ast::schema::TypeExtension::InputObject(ext) => ext.name.as_str(),
    }
}
