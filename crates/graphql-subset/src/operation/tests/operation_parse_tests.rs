use crate::ExtractError;
use crate::Value;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Selection;

#[test]
fn parses_shorthand_document_as_query() {
    let operation = Operation::parse("{ event { id } }").unwrap();

    assert_eq!(operation.kind, OperationKind::Query);
    assert_eq!(operation.selection_set.len(), 1);
    let Selection::Field(event) = &operation.selection_set[0] else {
        panic!("expected a field selection");
    };
    assert_eq!(event.name, "event");
    assert_eq!(event.selection_set.len(), 1);
}

#[test]
fn parses_named_operations_of_each_kind() {
    let query = Operation::parse("query Events { event { id } }").unwrap();
    assert_eq!(query.kind, OperationKind::Query);

    let mutation =
        Operation::parse("mutation CreateEvent { createEvent { id } }").unwrap();
    assert_eq!(mutation.kind, OperationKind::Mutation);

    let subscription =
        Operation::parse("subscription OnEvent { eventAdded { id } }").unwrap();
    assert_eq!(subscription.kind, OperationKind::Subscription);
}

#[test]
fn adapts_arguments_and_object_literals() {
    let operation = Operation::parse(
        r#"{ search(query: "party", filters: { category: MUSIC }) }"#,
    ).unwrap();

    let Selection::Field(search) = &operation.selection_set[0] else {
        panic!("expected a field selection");
    };
    assert_eq!(search.arguments.len(), 2);
    assert_eq!(search.arguments[0].name, "query");
    assert_eq!(search.arguments[0].value, Value::String("party".to_string()));
    assert_eq!(search.arguments[1].name, "filters");

    let Value::Object(object_fields) = &search.arguments[1].value else {
        panic!("expected an input-object literal");
    };
    assert_eq!(object_fields.len(), 1);
    assert_eq!(object_fields[0].name, "category");
    assert_eq!(object_fields[0].value, Value::Enum("MUSIC".to_string()));
}

#[test]
fn drops_field_aliases() {
    let operation = Operation::parse("{ renamed: event { id } }").unwrap();

    let Selection::Field(event) = &operation.selection_set[0] else {
        panic!("expected a field selection");
    };
    assert_eq!(event.name, "event");
}

#[test]
fn keeps_inline_fragment_type_conditions() {
    let operation =
        Operation::parse("{ search { ... on Event { id } } }").unwrap();

    let Selection::Field(search) = &operation.selection_set[0] else {
        panic!("expected a field selection");
    };
    let Selection::InlineFragment(fragment) = &search.selection_set[0] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(fragment.type_condition.as_deref(), Some("Event"));
    assert_eq!(fragment.selection_set.len(), 1);
}

#[test]
fn rejects_documents_with_multiple_operations() {
    let err = Operation::parse("query A { a } query B { b }").unwrap_err();

    assert_eq!(err, ExtractError::MultipleOperations { found: 2 });
}

#[test]
fn rejects_fragment_definitions() {
    let err = Operation::parse(concat!(
        "query { event { ...EventParts } }\n",
        "fragment EventParts on Event { id }",
    )).unwrap_err();

    assert_eq!(err, ExtractError::UnsupportedFragment {
        name: "EventParts".to_string(),
    });
}

#[test]
fn rejects_fragment_spreads() {
    let err = Operation::parse("{ event { ...EventParts } }").unwrap_err();

    assert_eq!(err, ExtractError::UnsupportedFragment {
        name: "EventParts".to_string(),
    });
}

#[test]
fn categorizes_syntax_errors() {
    let err = Operation::parse("query {").unwrap_err();

    assert!(matches!(err, ExtractError::QuerySyntax { .. }));
}
