//! Generic collection utilities.
//!
//! Three independent building blocks:
//!
//! - [`Queue`]: a FIFO queue with amortized O(1) enqueue/dequeue, backed by
//!   a growable buffer and a lazily advancing front index.
//! - [`TreeNode`] and [`SequenceTree`]: generic tree nodes with depth-first
//!   and breadth-first search, plus a capability trait that gives the same
//!   searches to any hierarchy that can snapshot itself as a tree.
//! - [`WeakArray`] and [`WeakBox`]: ordered weak-reference slots that never
//!   keep their referents alive.
//!
//! Everything here is single-threaded by contract. Weak slots build on
//! `Rc`/`Weak`, not `Arc`, so none of those types cross threads; callers
//! that need concurrent access must synchronize externally.

pub mod mutate;
pub mod queue;
pub mod tree;
pub mod tree_traits;
pub mod util;
pub mod weak_array;
pub mod weak_box;

pub use mutate::MutateExt;
pub use queue::Queue;
pub use tree::TreeNode;
pub use tree_traits::SequenceTree;
pub use weak_array::WeakArray;
pub use weak_box::WeakBox;
