use crate::collect::LeafPath;
use crate::collect::PathNode;
use crate::collect::collect_leaf_paths;
use crate::operation::Operation;

/// Render a path as `op > field:x > argument:y` so expectations stay
/// readable.
fn describe(path: &LeafPath<'_>) -> String {
    path.nodes.iter()
        .map(|node| match node {
            PathNode::Operation(_) => "op".to_string(),
            PathNode::Field(field) => format!("field:{}", field.name),
            PathNode::InlineFragment(fragment) => format!(
                "fragment:{}",
                fragment.type_condition.as_deref().unwrap_or("*"),
            ),
            PathNode::Argument(argument) => format!("argument:{}", argument.name),
            PathNode::ObjectField(object_field) =>
                format!("input:{}", object_field.name),
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

fn collect_described(query: &str) -> Vec<String> {
    let operation = Operation::parse(query).unwrap();
    collect_leaf_paths(&operation).iter().map(describe).collect()
}

#[test]
fn emits_one_path_per_field_argument_and_object_field() {
    let described = collect_described(r#"
        {
          event(id: "1") {
            description
          }
          search(filters: { venue: { city: "Berlin" } }) {
            ... on Event { id }
          }
        }
    "#);

    assert_eq!(described, vec![
        "op > field:event",
        "op > field:event > argument:id",
        "op > field:event > field:description",
        "op > field:search",
        "op > field:search > argument:filters",
        "op > field:search > argument:filters > input:venue",
        "op > field:search > argument:filters > input:venue > input:city",
        "op > field:search > fragment:Event > field:id",
    ]);
}

#[test]
fn inline_fragments_are_ancestors_but_never_terminate_a_path() {
    let described = collect_described("{ search { ... on Event { id name } } }");

    assert_eq!(described, vec![
        "op > field:search",
        "op > field:search > fragment:Event > field:id",
        "op > field:search > fragment:Event > field:name",
    ]);
}

#[test]
fn deeper_paths_re_walk_the_same_ancestors() {
    let operation = Operation::parse("{ a { b { c } } }").unwrap();
    let paths = collect_leaf_paths(&operation);

    assert_eq!(paths.len(), 3);
    assert_eq!(paths[0].nodes.len(), 2);
    assert_eq!(paths[1].nodes.len(), 3);
    assert_eq!(paths[2].nodes.len(), 4);
    assert_eq!(describe(&paths[2]), "op > field:a > field:b > field:c");
}

#[test]
fn walks_object_literals_nested_inside_list_literals() {
    let described = collect_described(
        "{ search(filters: [{ category: MUSIC }, { category: ARTS }]) }",
    );

    assert_eq!(described, vec![
        "op > field:search",
        "op > field:search > argument:filters",
        "op > field:search > argument:filters > input:category",
        "op > field:search > argument:filters > input:category",
    ]);
}

#[test]
fn scalar_argument_values_produce_no_extra_paths() {
    let described = collect_described(
        r#"{ search(query: "x", first: 10, after: null) }"#,
    );

    assert_eq!(described, vec![
        "op > field:search",
        "op > field:search > argument:query",
        "op > field:search > argument:first",
        "op > field:search > argument:after",
    ]);
}

#[test]
fn condition_less_inline_fragments_are_walked() {
    let described = collect_described("{ event { ... { id } } }");

    assert_eq!(described, vec![
        "op > field:event",
        "op > field:event > fragment:* > field:id",
    ]);
}
