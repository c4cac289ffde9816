use crate::ExtractError;
use crate::allow_list::ArgumentAllowList;
use crate::allow_list::ArgumentEntry;
use crate::allow_list::FieldAllowList;
use crate::allow_list::FieldEntry;
use crate::allow_list::build_allow_lists;
use crate::collect::collect_leaf_paths;
use crate::operation::Operation;
use crate::schema::SchemaDocument;

type AllowLists = (FieldAllowList, ArgumentAllowList);

const EVENT_SCHEMA: &str = r#"
    interface Event {
      id: ID!
      name: String!
      description: String!
      date: DateTime!
      location: String!
      organizer: Organizer!
    }

    type ClubNight implements Event {
      id: ID!
      name: String!
      description: String!
      date: DateTime!
      location: String!
      organizer: Organizer!
      lineup: [String!]!
    }

    type Organizer {
      id: ID!
      name: String!
      email: String!
      events: [Event!]!
    }

    union SearchResult = Event | Organizer

    enum EventCategory {
      MUSIC
      SPORTS
      ARTS
      EDUCATION
    }

    scalar DateTime

    input EventInput {
      name: String
      description: String
      date: DateTime
      location: String
      category: EventCategory
      venue: VenueInput
    }

    input VenueInput {
      city: String
      capacity: Int
    }

    type Query {
      event(id: ID!): Event
      organizer(id: ID!): Organizer
      search(query: String!, filters: EventInput): [SearchResult!]!
    }

    type Mutation {
      createEvent(input: EventInput!): Event
    }
"#;

fn build_for(query: &str) -> Result<AllowLists, ExtractError> {
    build_against(EVENT_SCHEMA, query)
}

fn build_against(
    schema_sdl: &str,
    query: &str,
) -> Result<AllowLists, ExtractError> {
    let schema = SchemaDocument::parse(schema_sdl).unwrap();
    let operation = Operation::parse(query).unwrap();
    let leaf_paths = collect_leaf_paths(&operation);
    build_allow_lists(&leaf_paths, &schema)
}

#[test]
fn resolves_root_fields_and_nested_fields() {
    let (fields, arguments) = build_for("{ event { description } }").unwrap();

    assert_eq!(fields.entries("Query"), &[FieldEntry {
        parent_type_name: "Query".to_string(),
        field_name: "event".to_string(),
        field_type_name: "Event".to_string(),
    }]);
    assert_eq!(fields.entries("Event"), &[FieldEntry {
        parent_type_name: "Event".to_string(),
        field_name: "description".to_string(),
        field_type_name: "String".to_string(),
    }]);
    assert!(!fields.contains_type("ClubNight"));
    assert_eq!(arguments, ArgumentAllowList::new());
}

#[test]
fn a_used_argument_retains_its_owning_field_too() {
    let (fields, arguments) = build_for(r#"{ event(id: "1") { id } }"#).unwrap();

    assert_eq!(arguments.entries("Query"), &[ArgumentEntry {
        parent_type_name: "Query".to_string(),
        field_name: "event".to_string(),
        argument_name: "id".to_string(),
        argument_type_name: "ID".to_string(),
    }]);
    assert!(fields.allows_field("Query", "event"));
    assert!(fields.allows_field("Event", "id"));
}

#[test]
fn resolves_against_the_mutation_root() {
    let (fields, arguments) =
        build_for(r#"mutation { createEvent(input: { name: "x" }) { id } }"#)
            .unwrap();

    assert!(fields.allows_field("Mutation", "createEvent"));
    assert!(fields.allows_field("EventInput", "name"));
    assert!(fields.allows_field("Event", "id"));
    assert!(arguments.allows_argument("Mutation", "createEvent", "input"));
}

#[test]
fn drills_recursively_into_nested_input_objects() {
    let (fields, arguments) =
        build_for(r#"{ search(filters: { venue: { city: "Berlin" } }) }"#)
            .unwrap();

    assert!(fields.allows_field("Query", "search"));
    assert!(fields.allows_field("EventInput", "venue"));
    assert!(fields.allows_field("VenueInput", "city"));
    assert!(!fields.allows_field("VenueInput", "capacity"));
    assert!(arguments.allows_argument("Query", "search", "filters"));
    assert_eq!(fields.entries("VenueInput"), &[FieldEntry {
        parent_type_name: "VenueInput".to_string(),
        field_name: "city".to_string(),
        field_type_name: "String".to_string(),
    }]);
}

#[test]
fn inline_fragments_narrow_into_union_members() {
    let (fields, _) =
        build_for("{ search { ... on Organizer { email } } }").unwrap();

    assert!(fields.allows_field("Query", "search"));
    assert!(fields.allows_field("Organizer", "email"));
    assert!(!fields.contains_type("Event"));
}

#[test]
fn condition_less_inline_fragments_keep_the_current_type() {
    let (fields, _) = build_for("{ event { ... { id } } }").unwrap();

    assert!(fields.allows_field("Event", "id"));
}

#[test]
fn typename_marks_the_type_without_retaining_fields() {
    let (fields, _) = build_for("{ event { __typename } }").unwrap();

    assert!(fields.contains_type("Event"));
    assert!(fields.entries("Event").is_empty());
    assert!(fields.allows_field("Query", "event"));
}

#[test]
fn honors_explicit_schema_definition_bindings() {
    let (fields, _) = build_against(
        concat!(
            "schema { query: QueryRoot }\n",
            "type QueryRoot { ping: String }",
        ),
        "{ ping }",
    ).unwrap();

    assert!(fields.allows_field("QueryRoot", "ping"));
}

#[test]
fn fails_when_the_root_operation_type_is_missing() {
    let err = build_for("subscription { eventAdded }").unwrap_err();

    assert_eq!(err, ExtractError::SchemaResolution {
        type_name: "Subscription".to_string(),
    });
}

#[test]
fn fails_on_unknown_fields() {
    let err = build_for("{ event { nonExistent } }").unwrap_err();

    assert_eq!(err, ExtractError::UnknownField {
        type_name: "Event".to_string(),
        field_name: "nonExistent".to_string(),
    });
}

#[test]
fn fails_on_unknown_arguments() {
    let err = build_for("{ event(missing: 1) { id } }").unwrap_err();

    assert_eq!(err, ExtractError::UnknownArgument {
        type_name: "Query".to_string(),
        field_name: "event".to_string(),
        argument_name: "missing".to_string(),
    });
}

#[test]
fn fails_on_unknown_input_object_fields() {
    let err = build_for("{ search(filters: { bogus: 1 }) }").unwrap_err();

    assert_eq!(err, ExtractError::UnknownField {
        type_name: "EventInput".to_string(),
        field_name: "bogus".to_string(),
    });
}

#[test]
fn fails_when_drilling_an_object_literal_into_a_scalar_argument() {
    let err = build_for(r#"{ event(id: { nested: 1 }) { id } }"#).unwrap_err();

    assert_eq!(err, ExtractError::SchemaResolution {
        type_name: "ID".to_string(),
    });
}

#[test]
fn fails_when_selecting_fields_on_a_union_without_a_fragment() {
    let err = build_for("{ search { id } }").unwrap_err();

    assert_eq!(err, ExtractError::SchemaResolution {
        type_name: "SearchResult".to_string(),
    });
}
