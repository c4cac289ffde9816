use crate::allow_list::ArgumentAllowList;
use crate::allow_list::ArgumentEntry;
use crate::allow_list::FieldAllowList;
use crate::allow_list::FieldEntry;
use crate::collect::LeafPath;
use crate::collect::PathNode;
use crate::error::ExtractError;
use crate::schema::Field;
use crate::schema::SchemaDocument;
use crate::schema::TypeDefinition;

type Result<T> = std::result::Result<T, ExtractError>;

/// Resolve every leaf path against the schema's type graph and accumulate
/// the two allow-lists the pruner consumes.
///
/// Each path is reduced left to right starting from the operation's root
/// type. Any resolution failure is fatal to the whole extraction; no partial
/// allow-list is ever returned.
pub fn build_allow_lists(
    leaf_paths: &[LeafPath<'_>],
    schema: &SchemaDocument,
) -> Result<(FieldAllowList, ArgumentAllowList)> {
    let mut field_allow_list = FieldAllowList::new();
    let mut argument_allow_list = ArgumentAllowList::new();
    for path in leaf_paths {
        resolve_leaf_path(
            path,
            schema,
            &mut field_allow_list,
            &mut argument_allow_list,
        )?;
    }
    Ok((field_allow_list, argument_allow_list))
}

/// The most recently resolved field definition, remembered so a following
/// Argument node can be looked up against it.
struct OwningField<'schema> {
    type_name: String,
    field: &'schema Field,
}

fn resolve_leaf_path(
    path: &LeafPath<'_>,
    schema: &SchemaDocument,
    field_allow_list: &mut FieldAllowList,
    argument_allow_list: &mut ArgumentAllowList,
) -> Result<()> {
    let Some(PathNode::Operation(operation)) = path.nodes.first() else {
        return Err(ExtractError::InternalInvariant {
            detail: "leaf path does not start at an operation definition"
                .to_string(),
        });
    };

    let root_type_name = schema.root_operation_type_name(operation.kind);
    if schema.object_type(root_type_name).is_none() {
        return Err(ExtractError::SchemaResolution {
            type_name: root_type_name.to_string(),
        });
    }

    let mut current_type_name = root_type_name.to_string();
    let mut owning_field: Option<OwningField<'_>> = None;

    for (index, node) in path.nodes.iter().enumerate().skip(1) {
        let terminal = index + 1 == path.nodes.len();
        match node {
            PathNode::Operation(_) => {
                return Err(ExtractError::InternalInvariant {
                    detail: "operation definition nested inside a leaf path"
                        .to_string(),
                });
            }

            PathNode::InlineFragment(fragment) => {
                // A type condition narrows into a union/interface member; a
                // condition-less fragment leaves the type unchanged.
                if let Some(condition) = &fragment.type_condition {
                    current_type_name = condition.clone();
                }
                owning_field = None;
            }

            PathNode::Field(field) => {
                // `__typename` exists on every selectable type; it retains
                // the type it is selected on, but no declared field.
                if field.name == "__typename" && terminal {
                    field_allow_list.insert_type(&current_type_name);
                    return Ok(());
                }

                let type_def = lookup_type(schema, &current_type_name)?;
                let field_def = match type_def {
                    TypeDefinition::Object(_) | TypeDefinition::Interface(_) =>
                        type_def.field(&field.name),
                    _ => {
                        return Err(ExtractError::SchemaResolution {
                            type_name: current_type_name,
                        });
                    }
                };
                let Some(field_def) = field_def else {
                    return Err(ExtractError::UnknownField {
                        type_name: current_type_name,
                        field_name: field.name.clone(),
                    });
                };

                let resolved_type_name =
                    field_def.type_ref.root_type_name().to_string();
                if terminal {
                    field_allow_list.insert(FieldEntry {
                        parent_type_name: current_type_name,
                        field_name: field.name.clone(),
                        field_type_name: resolved_type_name,
                    });
                    return Ok(());
                }
                owning_field = Some(OwningField {
                    type_name: current_type_name.clone(),
                    field: field_def,
                });
                current_type_name = resolved_type_name;
            }

            PathNode::Argument(argument) => {
                let followed_field =
                    matches!(path.nodes.get(index - 1), Some(PathNode::Field(_)));
                let Some(owning) = owning_field.take().filter(|_| followed_field)
                else {
                    return Err(ExtractError::InternalInvariant {
                        detail: "argument path node does not follow a field"
                            .to_string(),
                    });
                };

                let Some(argument_def) = owning.field.argument(&argument.name)
                else {
                    return Err(ExtractError::UnknownArgument {
                        type_name: owning.type_name,
                        field_name: owning.field.name.clone(),
                        argument_name: argument.name.clone(),
                    });
                };

                let resolved_type_name =
                    argument_def.type_ref.root_type_name().to_string();
                if terminal {
                    argument_allow_list.insert(ArgumentEntry {
                        parent_type_name: owning.type_name.clone(),
                        field_name: owning.field.name.clone(),
                        argument_name: argument.name.clone(),
                        argument_type_name: resolved_type_name,
                    });
                    // An argument never retains a field without also
                    // retaining the field itself.
                    field_allow_list.insert(FieldEntry {
                        parent_type_name: owning.type_name,
                        field_name: owning.field.name.clone(),
                        field_type_name: owning
                            .field
                            .type_ref
                            .root_type_name()
                            .to_string(),
                    });
                    return Ok(());
                }
                // The argument's value is an input-object literal being
                // drilled into; subsequent ObjectField nodes look up fields
                // on the argument's own type.
                current_type_name = resolved_type_name;
            }

            PathNode::ObjectField(object_field) => {
                let type_def = lookup_type(schema, &current_type_name)?;
                let input_field_def = match type_def {
                    TypeDefinition::InputObject(_) =>
                        type_def.input_field(&object_field.name),
                    _ => {
                        return Err(ExtractError::SchemaResolution {
                            type_name: current_type_name,
                        });
                    }
                };
                let Some(input_field_def) = input_field_def else {
                    return Err(ExtractError::UnknownField {
                        type_name: current_type_name,
                        field_name: object_field.name.clone(),
                    });
                };

                let resolved_type_name =
                    input_field_def.type_ref.root_type_name().to_string();
                if terminal {
                    field_allow_list.insert(FieldEntry {
                        parent_type_name: current_type_name,
                        field_name: object_field.name.clone(),
                        field_type_name: resolved_type_name,
                    });
                    return Ok(());
                }
                owning_field = None;
                current_type_name = resolved_type_name;
            }
        }
    }

    Err(ExtractError::InternalInvariant {
        detail: "leaf path does not terminate at a field, argument, or \
                object field"
            .to_string(),
    })
}

fn lookup_type<'schema>(
    schema: &'schema SchemaDocument,
    type_name: &str,
) -> Result<&'schema TypeDefinition> {
    schema.type_definition(type_name).ok_or_else(|| {
        ExtractError::SchemaResolution {
            type_name: type_name.to_string(),
        }
    })
}
