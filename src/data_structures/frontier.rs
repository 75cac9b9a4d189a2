use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier of (distance, node) pairs for shortest path engines
///
/// Entries are never removed or re-keyed in place; a node whose distance
/// improves is simply pushed again, and the caller discards stale entries at
/// pop time (lazy deletion). Ties on the distance value break on the node
/// identifier, so pop order is deterministic.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Eq + Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Frontier<V, P>
where
    V: Eq + Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the frontier, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a node with the given priority into the frontier
    pub fn push(&mut self, node: V, priority: P) {
        self.heap.push(Reverse((priority, node)));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, node))| (node, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, &P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, node))| (node, priority))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Eq + Ord + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Frontier::new()
    }
}
