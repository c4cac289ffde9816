mod argument;
mod field_selection;
mod inline_fragment;
mod operation;
mod operation_kind;
mod selection;

pub use argument::Argument;
pub use field_selection::FieldSelection;
pub use inline_fragment::InlineFragment;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use selection::Selection;

#[cfg(test)]
mod tests;
