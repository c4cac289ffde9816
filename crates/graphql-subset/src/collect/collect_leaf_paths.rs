use crate::collect::LeafPath;
use crate::collect::PathNode;
use crate::operation::Operation;
use crate::operation::Selection;
use crate::value::Value;

/// Walk an operation depth-first and emit one [`LeafPath`] per field
/// occurrence, per argument occurrence, and per object-field occurrence
/// inside argument literals.
///
/// Inline fragments participate as ancestors but never terminate a path.
/// Pure function; malformed shapes cannot occur because the operation model
/// is a closed sum.
pub fn collect_leaf_paths(operation: &Operation) -> Vec<LeafPath<'_>> {
    let mut paths = vec![];
    let mut ancestors = vec![PathNode::Operation(operation)];
    collect_from_selection_set(&operation.selection_set, &mut ancestors, &mut paths);
    paths
}

fn collect_from_selection_set<'op>(
    selection_set: &'op [Selection],
    ancestors: &mut Vec<PathNode<'op>>,
    paths: &mut Vec<LeafPath<'op>>,
) {
    for selection in selection_set {
        match selection {
            Selection::Field(field) => {
                ancestors.push(PathNode::Field(field));
                paths.push(LeafPath { nodes: ancestors.clone() });

                for argument in &field.arguments {
                    ancestors.push(PathNode::Argument(argument));
                    paths.push(LeafPath { nodes: ancestors.clone() });
                    collect_from_value(&argument.value, ancestors, paths);
                    ancestors.pop();
                }

                collect_from_selection_set(&field.selection_set, ancestors, paths);
                ancestors.pop();
            }

            Selection::InlineFragment(fragment) => {
                ancestors.push(PathNode::InlineFragment(fragment));
                collect_from_selection_set(&fragment.selection_set, ancestors, paths);
                ancestors.pop();
            }
        }
    }
}

fn collect_from_value<'op>(
    value: &'op Value,
    ancestors: &mut Vec<PathNode<'op>>,
    paths: &mut Vec<LeafPath<'op>>,
) {
    match value {
        Value::Object(object_fields) => {
            for object_field in object_fields {
                ancestors.push(PathNode::ObjectField(object_field));
                paths.push(LeafPath { nodes: ancestors.clone() });
                collect_from_value(&object_field.value, ancestors, paths);
                ancestors.pop();
            }
        }

        // Object literals nested inside list literals still resolve; the
        // list wrapper itself carries no type information.
        Value::List(items) => {
            for item in items {
                collect_from_value(item, ancestors, paths);
            }
        }

        _ => (),
    }
}
