use num_traits::Zero;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a shortest path computation
///
/// Both tables hold an entry for every node the solve saw: the registered
/// graph nodes plus any implicit node that only appeared as the target of a
/// dangling edge reference. A `None` distance is the infinity sentinel
/// (unreachable from the origin).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<N, W>
where
    N: Clone + Ord + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// Origin node the distances are measured from
    pub origin: N,

    /// Shortest distance from the origin to each node, None if unreachable
    pub distances: BTreeMap<N, Option<W>>,

    /// Predecessor of each node on its shortest path, None for the origin
    /// and for unreached nodes
    pub predecessors: BTreeMap<N, Option<N>>,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: Clone + Ord + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// Shortest distance from the origin to `node`, None if the node is
    /// unreachable or unknown
    pub fn distance_to(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    /// Shortest path from the origin to `destination`, in travel order
    ///
    /// See [`reconstruct_path`] for the unreached-destination caveat.
    pub fn path_to(&self, destination: &N) -> Result<Vec<N>> {
        reconstruct_path(&self.predecessors, destination)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Clone + Ord + Debug,
    W: Zero + Copy + Ord + Debug,
    G: Graph<N, W>,
{
    /// Computes shortest paths from an origin node to all other nodes
    fn solve(&self, graph: &G, origin: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Walks predecessor links from `destination` back to a node with no
/// predecessor and returns the walk reversed, i.e. in origin-to-destination
/// order.
///
/// If `destination` was never reached, no predecessor was recorded for it and
/// the result is the single-element `[destination]` - which is NOT a real path.
/// The caller must check the distance table to tell the two cases apart; this
/// function cannot, since an origin queried as its own destination yields the
/// same shape legitimately.
///
/// The table is expected to come from a solve, where strict-improvement
/// relaxation guarantees the links are acyclic.
pub fn reconstruct_path<N>(predecessors: &BTreeMap<N, Option<N>>, destination: &N) -> Result<Vec<N>>
where
    N: Clone + Ord + Debug,
{
    if !predecessors.contains_key(destination) {
        return Err(Error::UnknownNode(format!("{destination:?}")));
    }

    let mut path = vec![destination.clone()];
    let mut current = destination;
    while let Some(Some(predecessor)) = predecessors.get(current) {
        path.push(predecessor.clone());
        current = predecessor;
    }
    path.reverse();
    Ok(path)
}
