use crate::allow_list::ArgumentAllowList;
use crate::allow_list::FieldAllowList;
use crate::schema::Definition;
use crate::schema::InterfaceType;
use crate::schema::ObjectType;
use crate::schema::SchemaDefinition;
use crate::schema::SchemaDocument;
use crate::schema::TypeDefinition;
use crate::schema::UnionType;
use std::collections::HashSet;

/// Produce a new schema document containing only allow-listed types, fields,
/// and arguments, with a final cleanup pass that keeps the result
/// self-contained.
///
/// Four ordered passes:
///
/// 1. keep object/interface/input-object types whose name is allow-listed;
///    keep everything else unconditionally for now;
/// 2. on kept types, keep only allow-listed fields;
/// 3. on kept object/interface fields, keep only arguments allow-listed for
///    that owning field;
/// 4. drop unions/enums/scalars nothing references anymore, trim union
///    member lists, `implements` lists, and root-operation bindings to
///    definitions that survived.
///
/// The input document is left untouched. Inconsistent inputs cannot make
/// this fail; an inconsistency here is an allow-list builder defect.
pub fn prune_schema(
    schema: &SchemaDocument,
    field_allow_list: &FieldAllowList,
    argument_allow_list: &ArgumentAllowList,
) -> SchemaDocument {
    let filtered = filter_type_definitions(schema, field_allow_list);
    let filtered = filter_fields(filtered, field_allow_list);
    let filtered = filter_arguments(filtered, argument_allow_list);
    cleanup_unreachable(filtered)
}

/// Pass 1: drop object/interface/input-object definitions that retained no
/// field at all. Unions, enums, scalars, directive definitions, and the
/// schema block all survive this pass; pass 4 revisits them.
fn filter_type_definitions(
    schema: &SchemaDocument,
    field_allow_list: &FieldAllowList,
) -> SchemaDocument {
    let definitions = schema.definitions.iter()
        .filter(|def| match def {
            Definition::Type(TypeDefinition::Object(object_type)) =>
                field_allow_list.contains_type(&object_type.name),

            Definition::Type(TypeDefinition::Interface(interface_type)) =>
                field_allow_list.contains_type(&interface_type.name),

            Definition::Type(TypeDefinition::InputObject(input_object_type)) =>
                field_allow_list.contains_type(&input_object_type.name),

            _ => true,
        })
        .cloned()
        .collect();
    SchemaDocument { definitions }
}

/// Pass 2: on every surviving type that carries fields, keep only the
/// allow-listed ones.
fn filter_fields(
    schema: SchemaDocument,
    field_allow_list: &FieldAllowList,
) -> SchemaDocument {
    let definitions = schema.definitions.into_iter()
        .map(|def| match def {
            Definition::Type(TypeDefinition::Object(mut object_type)) => {
                object_type.fields.retain(|field| {
                    field_allow_list.allows_field(&object_type.name, &field.name)
                });
                Definition::Type(TypeDefinition::Object(object_type))
            }

            Definition::Type(TypeDefinition::Interface(mut interface_type)) => {
                interface_type.fields.retain(|field| {
                    field_allow_list.allows_field(&interface_type.name, &field.name)
                });
                Definition::Type(TypeDefinition::Interface(interface_type))
            }

            Definition::Type(TypeDefinition::InputObject(mut input_object_type)) => {
                input_object_type.fields.retain(|field| {
                    field_allow_list
                        .allows_field(&input_object_type.name, &field.name)
                });
                Definition::Type(TypeDefinition::InputObject(input_object_type))
            }

            other => other,
        })
        .collect();
    SchemaDocument { definitions }
}

/// Pass 3: on every surviving object/interface field, keep only arguments
/// allow-listed for that owning field. Input fields carry no arguments.
fn filter_arguments(
    schema: SchemaDocument,
    argument_allow_list: &ArgumentAllowList,
) -> SchemaDocument {
    let definitions = schema.definitions.into_iter()
        .map(|def| match def {
            Definition::Type(TypeDefinition::Object(mut object_type)) => {
                for field in &mut object_type.fields {
                    field.arguments.retain(|argument| {
                        argument_allow_list.allows_argument(
                            &object_type.name,
                            &field.name,
                            &argument.name,
                        )
                    });
                }
                Definition::Type(TypeDefinition::Object(object_type))
            }

            Definition::Type(TypeDefinition::Interface(mut interface_type)) => {
                for field in &mut interface_type.fields {
                    field.arguments.retain(|argument| {
                        argument_allow_list.allows_argument(
                            &interface_type.name,
                            &field.name,
                            &argument.name,
                        )
                    });
                }
                Definition::Type(TypeDefinition::Interface(interface_type))
            }

            other => other,
        })
        .collect();
    SchemaDocument { definitions }
}

/// Pass 4: reachability cleanup. Collect every type name still referenced by
/// the document, drop unions/enums/scalars that fell out of reach, and trim
/// the reference lists that may now point at dropped definitions.
fn cleanup_unreachable(schema: SchemaDocument) -> SchemaDocument {
    let referenced = referenced_type_names(&schema);

    let surviving_members: HashSet<&str> = schema.definitions.iter()
        .filter_map(|def| match def {
            Definition::Type(TypeDefinition::Object(object_type)) =>
                Some(object_type.name.as_str()),
            Definition::Type(TypeDefinition::Interface(interface_type)) =>
                Some(interface_type.name.as_str()),
            _ => None,
        })
        .collect();
    let surviving_interfaces: HashSet<&str> = schema.definitions.iter()
        .filter_map(|def| match def {
            Definition::Type(TypeDefinition::Interface(interface_type)) =>
                Some(interface_type.name.as_str()),
            _ => None,
        })
        .collect();

    let definitions = schema.definitions.iter()
        .filter_map(|def| match def {
            Definition::Type(TypeDefinition::Union(union_type)) => {
                if !referenced.contains(union_type.name.as_str()) {
                    return None;
                }
                let members = union_type.members.iter()
                    .filter(|member| surviving_members.contains(member.as_str()))
                    .cloned()
                    .collect();
                Some(Definition::Type(TypeDefinition::Union(UnionType {
                    members,
                    ..union_type.clone()
                })))
            }

            Definition::Type(TypeDefinition::Enum(enum_type)) =>
                referenced
                    .contains(enum_type.name.as_str())
                    .then(|| def.clone()),

            Definition::Type(TypeDefinition::Scalar(scalar_type)) =>
                referenced
                    .contains(scalar_type.name.as_str())
                    .then(|| def.clone()),

            Definition::Type(TypeDefinition::Object(object_type)) => {
                let implements_interfaces = object_type.implements_interfaces
                    .iter()
                    .filter(|name| surviving_interfaces.contains(name.as_str()))
                    .cloned()
                    .collect();
                Some(Definition::Type(TypeDefinition::Object(ObjectType {
                    implements_interfaces,
                    ..object_type.clone()
                })))
            }

            Definition::Type(TypeDefinition::Interface(interface_type)) => {
                let implements_interfaces = interface_type.implements_interfaces
                    .iter()
                    .filter(|name| surviving_interfaces.contains(name.as_str()))
                    .cloned()
                    .collect();
                Some(Definition::Type(TypeDefinition::Interface(InterfaceType {
                    implements_interfaces,
                    ..interface_type.clone()
                })))
            }

            Definition::Schema(schema_def) => {
                let trimmed = SchemaDefinition {
                    directives: schema_def.directives.clone(),
                    query: retained_binding(&schema_def.query, &surviving_members),
                    mutation: retained_binding(&schema_def.mutation, &surviving_members),
                    subscription: retained_binding(
                        &schema_def.subscription,
                        &surviving_members,
                    ),
                };
                let empty = trimmed.query.is_none()
                    && trimmed.mutation.is_none()
                    && trimmed.subscription.is_none();
                (!empty).then_some(Definition::Schema(trimmed))
            }

            _ => Some(def.clone()),
        })
        .collect();
    SchemaDocument { definitions }
}

/// Every type name referenced by a field type, argument type, input-field
/// type, union member list, or directive-definition argument type.
fn referenced_type_names(schema: &SchemaDocument) -> HashSet<&str> {
    let mut referenced = HashSet::new();
    for def in &schema.definitions {
        match def {
            Definition::Type(TypeDefinition::Object(object_type)) => {
                for field in &object_type.fields {
                    referenced.insert(field.type_ref.root_type_name());
                    for argument in &field.arguments {
                        referenced.insert(argument.type_ref.root_type_name());
                    }
                }
            }

            Definition::Type(TypeDefinition::Interface(interface_type)) => {
                for field in &interface_type.fields {
                    referenced.insert(field.type_ref.root_type_name());
                    for argument in &field.arguments {
                        referenced.insert(argument.type_ref.root_type_name());
                    }
                }
            }

            Definition::Type(TypeDefinition::InputObject(input_object_type)) => {
                for field in &input_object_type.fields {
                    referenced.insert(field.type_ref.root_type_name());
                }
            }

            Definition::Type(TypeDefinition::Union(union_type)) => {
                for member in &union_type.members {
                    referenced.insert(member.as_str());
                }
            }

            Definition::Directive(directive_def) => {
                for argument in &directive_def.arguments {
                    referenced.insert(argument.type_ref.root_type_name());
                }
            }

            Definition::Type(TypeDefinition::Enum(_))
            | Definition::Type(TypeDefinition::Scalar(_))
            | Definition::Schema(_) => (),
        }
    }
    referenced
}

fn retained_binding(
    binding: &Option<String>,
    surviving: &HashSet<&str>,
) -> Option<String> {
    binding.as_ref()
        .filter(|name| surviving.contains(name.as_str()))
        .cloned()
}
