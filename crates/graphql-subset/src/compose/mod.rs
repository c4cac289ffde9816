//! Contracts for the two external collaborators that turn subset schemas
//! into customer-facing "product" schemas: a merge routine combining several
//! subset documents into one, and a diff routine reporting breaking changes
//! between a product schema and the canonical source schema.
//!
//! Neither routine is implemented here; this module defines their
//! input/output contracts and the wiring that validates what crosses the
//! boundary in each direction.

use crate::error::ExtractError;
use crate::schema::SchemaDocument;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// The external routine that merges N subset schema texts into one product
/// schema text. The contract is a union of type definitions; how the routine
/// resolves field or argument conflicts is its own concern.
pub trait SchemaMerge {
    fn merge(&self, schema_sdls: &[String]) -> Result<String, ComposeError>;
}

/// The external routine that compares two schema texts and reports the
/// changes that would break clients of the first.
pub trait SchemaDiff {
    fn diff(
        &self,
        source_sdl: &str,
        product_sdl: &str,
    ) -> Result<DiffReport, ComposeError>;
}

/// A structured breaking-change report from a [`SchemaDiff`] routine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiffReport {
    pub breaking_changes: Vec<BreakingChange>,
}
impl DiffReport {
    /// Whether the compared schemas are consistent, i.e. nothing breaks.
    pub fn is_consistent(&self) -> bool {
        self.breaking_changes.is_empty()
    }
}

/// One breaking change, as reported by the diff routine.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakingChange {
    pub message: String,
    /// Dotted path to the changed element (e.g. `Query.event.id`), when the
    /// routine provides one.
    pub path: Option<String>,
}

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Subset schema {index} is not a valid schema document")]
    InvalidSubsetSchema {
        index: usize,
        source: ExtractError,
    },

    #[error("The merge routine failed: {err}")]
    Merge {
        err: String,
    },

    #[error("The merge routine produced an invalid schema document")]
    InvalidMergedSchema {
        source: ExtractError,
    },

    #[error("The diff routine failed: {err}")]
    Diff {
        err: String,
    },
}

/// Merge several subset schema texts into one product schema text, checking
/// that every input and the merged output actually parse as schema
/// documents. The merge itself is delegated to `merger`.
pub fn compose_product_schema(
    subset_sdls: &[String],
    merger: &impl SchemaMerge,
) -> Result<String, ComposeError> {
    for (index, sdl) in subset_sdls.iter().enumerate() {
        SchemaDocument::parse(sdl).map_err(|source| {
            ComposeError::InvalidSubsetSchema { index, source }
        })?;
    }
    let merged = merger.merge(subset_sdls)?;
    SchemaDocument::parse(&merged)
        .map_err(|source| ComposeError::InvalidMergedSchema { source })?;
    Ok(merged)
}

/// Compare a composed product schema against the canonical source schema it
/// was derived from. The comparison is delegated to `differ`; callers decide
/// what to do with a non-consistent report.
pub fn check_product_against_source(
    source_sdl: &str,
    product_sdl: &str,
    differ: &impl SchemaDiff,
) -> Result<DiffReport, ComposeError> {
    differ.diff(source_sdl, product_sdl)
}
