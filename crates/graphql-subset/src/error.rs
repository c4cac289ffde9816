use thiserror::Error;

/// Every way a schema-subset extraction can fail.
///
/// All of these are fatal to the extraction call that raised them; the engine
/// never returns a partially pruned schema.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("Error parsing query document: {err}")]
    QuerySyntax {
        err: String,
    },

    #[error("Error parsing schema document: {err}")]
    SchemaSyntax {
        err: String,
    },

    #[error(
        "The `{type_name}` type is not defined in the schema, or is not a \
        kind of type that can be resolved into"
    )]
    SchemaResolution {
        type_name: String,
    },

    #[error("The `{type_name}` type has no field named `{field_name}`")]
    UnknownField {
        type_name: String,
        field_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field has no argument named \
        `{argument_name}`"
    )]
    UnknownArgument {
        type_name: String,
        field_name: String,
        argument_name: String,
    },

    #[error(
        "Expected exactly one operation definition in the query document, \
        found {found}"
    )]
    MultipleOperations {
        found: usize,
    },

    #[error(
        "Named fragments are not supported; inline the `{name}` fragment \
        into the operation"
    )]
    UnsupportedFragment {
        name: String,
    },

    #[error("Type extensions are not supported (found `extend` of `{type_name}`)")]
    UnsupportedTypeExtension {
        type_name: String,
    },

    #[error("Internal invariant violated: {detail}")]
    InternalInvariant {
        detail: String,
    },
}
