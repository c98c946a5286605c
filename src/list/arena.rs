//! Arena-backed singly-linked nodes

use std::fmt;

/// Handle to a node inside a [`NodeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// A value with an optional link to the next node
#[derive(Debug, Clone, PartialEq)]
pub struct ListNode<T> {
    pub value: T,
    pub next: Option<NodeId>,
}

/// Owns a set of linked nodes
///
/// Links may point anywhere in the arena, including backwards or at the node
/// itself, which is how cyclic lists are built.
#[derive(Clone)]
pub struct NodeArena<T> {
    nodes: Vec<ListNode<T>>,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an empty arena with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Builds an acyclic list `v0 -> v1 -> ... -> vn` and returns it with its head
    ///
    /// The head is `None` when `values` is empty.
    pub fn from_values<I>(values: I) -> (Self, Option<NodeId>)
    where
        I: IntoIterator<Item = T>,
    {
        let mut arena = Self::new();
        let mut prev: Option<NodeId> = None;

        for value in values {
            let id = arena.push(value);
            if let Some(p) = prev {
                arena.link(p, id);
            }
            prev = Some(id);
        }

        let head = if arena.is_empty() { None } else { Some(NodeId(0)) };
        (arena, head)
    }

    /// Adds an unlinked node
    pub fn push(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ListNode { value, next: None });
        id
    }

    /// Points `from` at `to`, replacing any previous link
    ///
    /// # Panics
    ///
    /// Panics if either id does not belong to this arena.
    pub fn link(&mut self, from: NodeId, to: NodeId) {
        assert!(
            to.0 < self.nodes.len(),
            "Link target {} out of bounds (len = {})",
            to.0,
            self.nodes.len()
        );
        self.node_mut(from).next = Some(to);
    }

    /// Removes the outgoing link of `from`
    pub fn unlink(&mut self, from: NodeId) {
        self.node_mut(from).next = None;
    }

    /// Successor of `id`, if any
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.next)
    }

    /// Looks up a node
    pub fn get(&self, id: NodeId) -> Option<&ListNode<T>> {
        self.nodes.get(id.0)
    }

    /// Value stored at `id`
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this arena.
    pub fn value(&self, id: NodeId) -> &T {
        &self.node(id).value
    }

    /// Id of the node at position `index`, if it exists
    pub fn id(&self, index: usize) -> Option<NodeId> {
        (index < self.nodes.len()).then_some(NodeId(index))
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> &ListNode<T> {
        let len = self.nodes.len();
        self.nodes
            .get(id.0)
            .unwrap_or_else(|| panic!("Node {} out of bounds (len = {})", id.0, len))
    }

    fn node_mut(&mut self, id: NodeId) -> &mut ListNode<T> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .unwrap_or_else(|| panic!("Node {} out of bounds (len = {})", id.0, len))
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeArena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NodeArena {{")?;
        writeln!(f, "  nodes: {}", self.nodes.len())?;

        // Print a sample of the links
        let max_nodes_to_print = 8.min(self.nodes.len());
        for (i, node) in self.nodes.iter().take(max_nodes_to_print).enumerate() {
            match node.next {
                Some(next) => writeln!(f, "  [{}] {:?} -> [{}]", i, node.value, next.0)?,
                None => writeln!(f, "  [{}] {:?} -> end", i, node.value)?,
            }
        }
        if self.nodes.len() > max_nodes_to_print {
            writeln!(f, "  ...")?;
        }

        write!(f, "}}")
    }
}
