//! Fast/slow pointer cycle detection (Floyd's tortoise and hare)
//!
//! The slow cursor advances one node per step and the fast cursor two. If the
//! fast cursor runs off the end there is no cycle. If the two ever land on the
//! same node, the structure loops. Either outcome is reached within O(n)
//! steps, where n is the number of nodes reachable from the head.
//!
//! Only the yes/no answer is computed; the cycle's entry node and length are
//! not reported.

use tracing::trace;

use crate::list::Successors;

/// Progress of a [`FastSlowScan`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// Cursors are still moving
    Scanning,
    /// The fast cursor reached the end of the structure
    NoCycle,
    /// The cursors met on the same node
    CycleDetected,
}

impl CycleState {
    /// Whether the scan has finished; terminal states never change
    pub fn is_terminal(self) -> bool {
        !matches!(self, CycleState::Scanning)
    }
}

/// A cycle scan that can be driven one step at a time
pub struct FastSlowScan<'a, L>
where
    L: Successors + ?Sized,
{
    list: &'a L,
    slow: Option<L::Node>,
    fast: Option<L::Node>,
    state: CycleState,
    steps: usize,
}

impl<'a, L> FastSlowScan<'a, L>
where
    L: Successors + ?Sized,
{
    /// Places both cursors on `head`
    ///
    /// An empty structure (`head == None`) starts out in [`CycleState::NoCycle`].
    pub fn new(list: &'a L, head: Option<L::Node>) -> Self {
        let state = match head {
            Some(_) => CycleState::Scanning,
            None => CycleState::NoCycle,
        };
        Self {
            list,
            slow: head,
            fast: head,
            state,
            steps: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Number of completed cursor moves
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advances slow by one node and fast by two, then updates the state
    pub fn step(&mut self) -> CycleState {
        if self.state.is_terminal() {
            return self.state;
        }

        let (Some(slow), Some(fast)) = (self.slow, self.fast) else {
            self.state = CycleState::NoCycle;
            return self.state;
        };

        let Some(fast_next) = self.list.successor(fast) else {
            self.state = CycleState::NoCycle;
            return self.state;
        };

        self.slow = self.list.successor(slow);
        self.fast = self.list.successor(fast_next);
        self.steps += 1;

        self.state = match self.fast {
            None => CycleState::NoCycle,
            Some(_) if self.slow == self.fast => CycleState::CycleDetected,
            Some(_) => CycleState::Scanning,
        };
        self.state
    }

    /// Steps until a terminal state is reached
    pub fn run(mut self) -> CycleState {
        while !self.state.is_terminal() {
            self.step();
        }
        trace!(steps = self.steps, state = ?self.state, "cycle scan finished");
        self.state
    }
}

/// Returns `true` if a cycle is reachable from `head`
///
/// # Examples
///
/// ```
/// use scanpat::{has_cycle, NodeArena};
///
/// let (mut arena, head) = NodeArena::from_values([1, 2, 3, 4, 5]);
/// assert!(!has_cycle(&arena, head));
///
/// // 5 -> 3
/// let (fifth, third) = (arena.id(4).unwrap(), arena.id(2).unwrap());
/// arena.link(fifth, third);
/// assert!(has_cycle(&arena, head));
///
/// assert!(!has_cycle(&arena, None));
/// ```
pub fn has_cycle<L>(list: &L, head: Option<L::Node>) -> bool
where
    L: Successors + ?Sized,
{
    FastSlowScan::new(list, head).run() == CycleState::CycleDetected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::NodeArena;

    fn five_nodes_looping_to(target: usize) -> (NodeArena<i32>, Option<crate::list::NodeId>) {
        let (mut arena, head) = NodeArena::from_values([1, 2, 3, 4, 5]);
        let last = arena.id(4).unwrap();
        let to = arena.id(target).unwrap();
        arena.link(last, to);
        (arena, head)
    }

    #[test]
    fn test_tail_loops_to_third() {
        let (arena, head) = five_nodes_looping_to(2);
        assert!(has_cycle(&arena, head));
    }

    #[test]
    fn test_empty_structure() {
        let arena = NodeArena::<i32>::new();
        assert!(!has_cycle(&arena, None));
        assert_eq!(FastSlowScan::new(&arena, None).state(), CycleState::NoCycle);
    }

    #[test]
    fn test_acyclic_lengths() {
        for n in 1..8 {
            let (arena, head) = NodeArena::from_values(0..n);
            assert!(!has_cycle(&arena, head), "list of {} nodes", n);
        }
    }

    #[test]
    fn test_self_loop() {
        let mut arena = NodeArena::new();
        let only = arena.push(7);
        arena.link(only, only);
        assert!(has_cycle(&arena, Some(only)));
    }

    #[test]
    fn test_two_node_loop() {
        let (mut arena, head) = NodeArena::from_values([1, 2]);
        let second = arena.id(1).unwrap();
        arena.link(second, head.unwrap());
        assert!(has_cycle(&arena, head));
    }

    #[test]
    fn test_loop_back_to_head() {
        let (arena, head) = five_nodes_looping_to(0);
        assert!(has_cycle(&arena, head));
    }

    #[test]
    fn test_terminal_states_absorb() {
        let (arena, head) = five_nodes_looping_to(2);
        let mut scan = FastSlowScan::new(&arena, head);
        while !scan.step().is_terminal() {}

        let steps = scan.steps();
        assert_eq!(scan.state(), CycleState::CycleDetected);
        assert_eq!(scan.step(), CycleState::CycleDetected);
        assert_eq!(scan.steps(), steps);
    }

    #[test]
    fn test_steps_bounded_by_length() {
        let (arena, head) = five_nodes_looping_to(2);
        let mut scan = FastSlowScan::new(&arena, head);
        while !scan.step().is_terminal() {}
        assert!(scan.steps() <= arena.len());
    }

    #[test]
    fn test_successor_table() {
        // 0 -> 1 -> 2 -> 1
        let table: Vec<Option<usize>> = vec![Some(1), Some(2), Some(1)];
        assert!(has_cycle(table.as_slice(), Some(0)));

        let table: Vec<Option<usize>> = vec![Some(1), Some(2), None];
        assert!(!has_cycle(table.as_slice(), Some(0)));
    }
}
