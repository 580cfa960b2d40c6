//! Capability trait for searching arbitrary hierarchies.

use crate::tree::TreeNode;

/// A hierarchy that can render itself as a [`TreeNode`] and thereby gains
/// depth-first and breadth-first search.
///
/// Implementors only provide [`tree_node`](SequenceTree::tree_node); the
/// searches are supplied and share the semantics of the [`TreeNode`]
/// searches. The snapshot is built when a search begins and dropped when
/// it returns, so a match is cloned out of it rather than borrowed.
pub trait SequenceTree {
    /// Element type stored at each node of the hierarchy.
    type Element;

    /// The hierarchy rendered as a tree, child order preserved.
    fn tree_node(&self) -> TreeNode<Self::Element>;

    /// Pre-order search over the rendered hierarchy.
    fn depth_first_search<F>(&self, predicate: F) -> Option<Self::Element>
    where
        F: FnMut(&Self::Element) -> bool,
        Self::Element: Clone,
    {
        self.tree_node().depth_first_search(predicate).cloned()
    }

    /// Pre-order search with a fallible predicate; errors propagate
    /// unchanged.
    fn try_depth_first_search<F, E>(&self, predicate: F) -> Result<Option<Self::Element>, E>
    where
        F: FnMut(&Self::Element) -> Result<bool, E>,
        Self::Element: Clone,
    {
        Ok(self.tree_node().try_depth_first_search(predicate)?.cloned())
    }

    /// Level-order search over the rendered hierarchy.
    fn breadth_first_search<F>(&self, predicate: F) -> Option<Self::Element>
    where
        F: FnMut(&Self::Element) -> bool,
        Self::Element: Clone,
    {
        self.tree_node().breadth_first_search(predicate).cloned()
    }

    /// Level-order search with a fallible predicate; errors propagate
    /// unchanged.
    fn try_breadth_first_search<F, E>(&self, predicate: F) -> Result<Option<Self::Element>, E>
    where
        F: FnMut(&Self::Element) -> Result<bool, E>,
        Self::Element: Clone,
    {
        Ok(self
            .tree_node()
            .try_breadth_first_search(predicate)?
            .cloned())
    }
}
