use num_traits::Zero;
use std::fmt::Debug;

/// Trait representing a weighted directed graph keyed by node identifier
pub trait Graph<N, W>: Debug
where
    N: Clone + Ord + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the node identifiers of the graph
    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a N> + 'a>;

    /// Returns an iterator over the outgoing edges from a node
    ///
    /// Yields nothing for a node that is absent from the graph, including a
    /// node that only appears as the target of a dangling edge reference.
    fn outgoing_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;
}

/// Trait for building up a graph before handing it to an engine
///
/// Mutation is a construction-time convenience; a solve call only ever sees the
/// graph through the immutable [`Graph`] view.
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Clone + Ord + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// Adds a node with no outgoing edges; returns false if it already existed
    fn add_node(&mut self, node: N) -> bool;

    /// Adds a directed edge between nodes with the given weight
    ///
    /// The `from` endpoint is registered as a node if it was missing; the `to`
    /// endpoint is NOT, so a dangling reference stays dangling until the caller
    /// registers it. Supplying the same (from, to) pair twice overwrites the
    /// weight (last write wins) - that is a caller error, not a graph state the
    /// engine distinguishes. Negative weights are accepted here and rejected by
    /// the engine before any relaxation.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;
}
