//! Singly-linked structures for pointer-chasing scans
//!
//! Nodes are owned by a [`NodeArena`] and refer to their successor by
//! [`NodeId`], so cycles can be built without shared ownership or raw
//! pointers. Node identity is id equality.

pub mod arena;

pub use arena::{ListNode, NodeArena, NodeId};

/// A structure where every node has at most one successor
///
/// This is the only view the cycle detector needs: it never reads values and
/// never mutates the structure.
pub trait Successors {
    /// Node handle, compared by identity
    type Node: Copy + Eq;

    /// The node after `node`, or `None` at the end of the structure
    fn successor(&self, node: Self::Node) -> Option<Self::Node>;
}

impl<T> Successors for NodeArena<T> {
    type Node = NodeId;

    fn successor(&self, node: NodeId) -> Option<NodeId> {
        self.next(node)
    }
}

/// A successor table: `table[i]` is the index following node `i`
impl Successors for [Option<usize>] {
    type Node = usize;

    fn successor(&self, node: usize) -> Option<usize> {
        self.get(node).copied().flatten()
    }
}
