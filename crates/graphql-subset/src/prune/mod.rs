mod prune_schema;

pub use prune_schema::prune_schema;
