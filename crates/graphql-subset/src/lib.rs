//! An engine for deriving query-driven subsets of a GraphQL schema.
//!
//! Given a full schema document and a client query written against it, the
//! engine computes the smallest schema document that still contains every
//! type, field, and argument the query touches, and nothing else:
//!
//! 1. [`collect::collect_leaf_paths`] walks the query and emits the ancestor
//!    chain of every field, argument, and input-object-field occurrence.
//! 2. [`allow_list::build_allow_lists`] resolves each chain against the
//!    schema's type graph into a field allow-list and an argument allow-list.
//! 3. [`prune::prune_schema`] filters the schema document down to the
//!    allow-listed names and drops definitions nothing references anymore.
//!
//! Parsing and printing are delegated to `graphql_parser`; everything in
//! between operates on the engine's own [`schema`] and [`operation`] models.

pub mod allow_list;
pub mod ast;
pub mod collect;
pub mod compose;
mod error;
mod extract;
pub mod operation;
pub mod prune;
pub mod schema;
mod value;

pub use error::ExtractError;
pub use extract::Extraction;
pub use extract::extract;
pub use extract::extract_minimal_document;
pub use extract::extract_minimal_schema;
pub use value::ObjectField;
pub use value::Value;
