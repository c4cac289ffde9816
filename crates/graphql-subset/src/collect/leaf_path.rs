use crate::collect::PathNode;

/// The ordered chain of nodes from a root operation definition down to one
/// field, argument, or input-object-field occurrence.
///
/// Paths deliberately overlap: a nested occurrence's path re-walks the same
/// ancestors as its parent's path, so every path can be resolved against the
/// schema independently of every other.
#[derive(Clone, Debug)]
pub struct LeafPath<'op> {
    pub nodes: Vec<PathNode<'op>>,
}
