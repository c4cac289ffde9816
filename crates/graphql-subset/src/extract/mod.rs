use crate::allow_list::ArgumentAllowList;
use crate::allow_list::FieldAllowList;
use crate::allow_list::build_allow_lists;
use crate::collect::collect_leaf_paths;
use crate::error::ExtractError;
use crate::operation::Operation;
use crate::prune::prune_schema;
use crate::schema::SchemaDocument;

#[cfg(test)]
mod tests;

/// Everything one extraction produces: the pruned document plus the two
/// allow-lists that shaped it. The allow-lists are exposed for callers that
/// want to inspect or log what was retained and why.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    pub document: SchemaDocument,
    pub field_allow_list: FieldAllowList,
    pub argument_allow_list: ArgumentAllowList,
}

/// Run the full pipeline: parse both texts, collect leaf paths, build the
/// allow-lists, and prune the schema.
pub fn extract(
    schema_text: &str,
    query_text: &str,
) -> Result<Extraction, ExtractError> {
    let schema = SchemaDocument::parse(schema_text)?;
    let operation = Operation::parse(query_text)?;
    let leaf_paths = collect_leaf_paths(&operation);
    let (field_allow_list, argument_allow_list) =
        build_allow_lists(&leaf_paths, &schema)?;
    let document = prune_schema(&schema, &field_allow_list, &argument_allow_list);
    Ok(Extraction {
        document,
        field_allow_list,
        argument_allow_list,
    })
}

/// Extract the smallest schema document that still contains every type,
/// field, and argument `query_text` touches, returned as SDL text.
pub fn extract_minimal_schema(
    schema_text: &str,
    query_text: &str,
) -> Result<String, ExtractError> {
    Ok(extract(schema_text, query_text)?.document.to_sdl())
}

/// Same pipeline as [`extract_minimal_schema`], stopping before the printer
/// for callers that want to keep working on the document value.
pub fn extract_minimal_document(
    schema_text: &str,
    query_text: &str,
) -> Result<SchemaDocument, ExtractError> {
    Ok(extract(schema_text, query_text)?.document)
}
