use crate::operation::Argument;
use crate::operation::FieldSelection;
use crate::operation::InlineFragment;
use crate::operation::Operation;
use crate::value::ObjectField;

/// One entry in a [`LeafPath`](crate::collect::LeafPath): a reference into
/// the operation tree, tagged by node kind.
///
/// Only kinds that carry type information appear here. Selection-set,
/// object-literal, and list-literal wrappers are skipped during collection;
/// they contribute nothing to resolution.
#[derive(Clone, Copy, Debug)]
pub enum PathNode<'op> {
    Operation(&'op Operation),
    Field(&'op FieldSelection),
    InlineFragment(&'op InlineFragment),
    Argument(&'op Argument),
    ObjectField(&'op ObjectField),
}
