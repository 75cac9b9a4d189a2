use crate::graph::traits::{Graph, MutableGraph};
use num_traits::Zero;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A directed graph stored as an adjacency mapping: node -> (neighbor -> weight)
///
/// Ordered maps back both levels so node and edge iteration order is the node
/// identifier order, which keeps every solve over the same graph deterministic.
/// An edge may reference a neighbor that was never registered as a node; the
/// engine tolerates that and treats the neighbor as an implicit isolated node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph<N, W>
where
    N: Clone + Ord + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// Outgoing edges for each node: node -> {neighbor: weight}
    edges: BTreeMap<N, BTreeMap<N, W>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Ord + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            edges: BTreeMap::new(),
        }
    }

    /// Wraps a caller-built adjacency mapping without copying it
    pub fn from_map(edges: BTreeMap<N, BTreeMap<N, W>>) -> Self {
        AdjacencyGraph { edges }
    }

    /// Builds a graph from (from, to, weight) triples, registering both endpoints
    pub fn from_edges<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = AdjacencyGraph::new();
        for (from, to, weight) in triples {
            graph.add_node(to.clone());
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Returns true if no edge in the graph carries a negative weight
    pub fn validate_non_negative(&self) -> bool {
        for neighbors in self.edges.values() {
            for weight in neighbors.values() {
                if *weight < W::zero() {
                    return false;
                }
            }
        }
        true
    }
}

impl<N, W> Graph<N, W> for AdjacencyGraph<N, W>
where
    N: Clone + Ord + Debug,
    W: Zero + Copy + Ord + Debug,
{
    fn node_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.values().map(|neighbors| neighbors.len()).sum()
    }

    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        Box::new(self.edges.keys())
    }

    fn outgoing_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a> {
        if let Some(neighbors) = self.edges.get(node) {
            Box::new(neighbors.iter().map(|(to, weight)| (to, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edges
            .get(from)
            .map_or(false, |neighbors| neighbors.contains_key(to))
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.edges.get(from)?.get(to).copied()
    }
}

impl<N, W> MutableGraph<N, W> for AdjacencyGraph<N, W>
where
    N: Clone + Ord + Debug,
    W: Zero + Copy + Ord + Debug,
{
    fn add_node(&mut self, node: N) -> bool {
        match self.edges.entry(node) {
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(BTreeMap::new());
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        self.edges
            .entry(from)
            .or_default()
            .insert(to, weight)
            .is_none()
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        self.edges
            .get_mut(from)
            .map_or(false, |neighbors| neighbors.remove(to).is_some())
    }
}
