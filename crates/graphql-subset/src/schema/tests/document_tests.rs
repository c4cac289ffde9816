use crate::ExtractError;
use crate::operation::OperationKind;
use crate::schema::SchemaDocument;
use crate::schema::TypeDefinition;
use crate::schema::TypeRef;

const SMALL_SCHEMA: &str = r#"
    interface Node {
      id: ID!
    }

    type Post implements Node {
      id: ID!
      title: String!
      tags: [String!]
    }

    union Content = Post

    enum Visibility {
      PUBLIC
      HIDDEN
    }

    input PostFilter {
      visibility: Visibility
      tag: String = "all"
    }

    directive @cached(ttl: Int!) on FIELD_DEFINITION | OBJECT

    type Query {
      post(id: ID!): Post
      posts(filter: PostFilter): [Post!]!
    }
"#;

#[test]
fn looks_up_type_definitions_by_name() {
    let document = SchemaDocument::parse(SMALL_SCHEMA).unwrap();

    assert!(matches!(
        document.type_definition("Node"),
        Some(TypeDefinition::Interface(_)),
    ));
    assert!(matches!(
        document.type_definition("Content"),
        Some(TypeDefinition::Union(_)),
    ));
    assert!(document.type_definition("Missing").is_none());

    let query_type = document.object_type("Query").unwrap();
    let post_field = query_type.field("post").unwrap();
    assert_eq!(post_field.type_ref, TypeRef::Named("Post".to_string()));
    assert_eq!(
        post_field.argument("id").unwrap().type_ref,
        TypeRef::NonNull(Box::new(TypeRef::Named("ID".to_string()))),
    );
}

#[test]
fn root_operation_names_default_to_conventions() {
    let document = SchemaDocument::parse(SMALL_SCHEMA).unwrap();

    assert_eq!(
        document.root_operation_type_name(OperationKind::Query),
        "Query",
    );
    assert_eq!(
        document.root_operation_type_name(OperationKind::Mutation),
        "Mutation",
    );
}

#[test]
fn root_operation_names_honor_an_explicit_schema_block() {
    let document = SchemaDocument::parse(concat!(
        "schema { query: QueryRoot subscription: Events }\n",
        "type QueryRoot { ping: String }\n",
        "type Events { tick: Int }",
    )).unwrap();

    assert_eq!(
        document.root_operation_type_name(OperationKind::Query),
        "QueryRoot",
    );
    assert_eq!(
        document.root_operation_type_name(OperationKind::Subscription),
        "Events",
    );
    // No mutation binding declared, so the convention still applies.
    assert_eq!(
        document.root_operation_type_name(OperationKind::Mutation),
        "Mutation",
    );
}

#[test]
fn rejects_type_extensions() {
    let err = SchemaDocument::parse(concat!(
        "type Query { a: String }\n",
        "extend type Query { b: String }",
    )).unwrap_err();

    assert_eq!(err, ExtractError::UnsupportedTypeExtension {
        type_name: "Query".to_string(),
    });
}

#[test]
fn categorizes_syntax_errors() {
    let err = SchemaDocument::parse("type {").unwrap_err();

    assert!(matches!(err, ExtractError::SchemaSyntax { .. }));
}

#[test]
fn printing_and_reparsing_preserves_the_document() {
    let document = SchemaDocument::parse(SMALL_SCHEMA).unwrap();
    let reparsed = SchemaDocument::parse(&document.to_sdl()).unwrap();

    assert_eq!(document, reparsed);
}
