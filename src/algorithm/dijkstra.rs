use log::warn;
use num_traits::Zero;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm: priority-driven relaxation with a
/// lazy-deletion binary heap frontier
///
/// O((n + m) log n) for n nodes and m edges. Correct only for non-negative
/// weights, which is why [`solve`](ShortestPathAlgorithm::solve) rejects
/// negative weights before relaxing anything.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra engine instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Clone + Ord + Debug,
    W: Zero + Copy + Ord + Debug,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn solve(&self, graph: &G, origin: &N) -> Result<ShortestPathResult<N, W>> {
        if !graph.has_node(origin) {
            return Err(Error::InvalidOrigin(format!("{origin:?}")));
        }

        // Validate the whole edge set up front. Failing mid-run would leave a
        // partially wrong table, and no partial result may ever escape.
        for node in graph.nodes() {
            for (neighbor, weight) in graph.outgoing_edges(node) {
                if weight < W::zero() {
                    return Err(Error::InvalidWeight {
                        from: format!("{node:?}"),
                        to: format!("{neighbor:?}"),
                        weight: format!("{weight:?}"),
                    });
                }
            }
        }

        // None is the infinity sentinel: every node starts unreachable except
        // the origin at distance zero.
        let mut distances: BTreeMap<N, Option<W>> =
            graph.nodes().map(|node| (node.clone(), None)).collect();
        let mut predecessors: BTreeMap<N, Option<N>> =
            graph.nodes().map(|node| (node.clone(), None)).collect();
        distances.insert(origin.clone(), Some(W::zero()));

        let mut frontier = Frontier::new();
        frontier.push(origin.clone(), W::zero());

        // A finalized node's distance is permanent; stale frontier entries for
        // it are discarded at pop time rather than deleted eagerly.
        let mut finalized: BTreeSet<N> = BTreeSet::new();

        while let Some((node, distance)) = frontier.pop() {
            if !finalized.insert(node.clone()) {
                continue;
            }

            for (neighbor, weight) in graph.outgoing_edges(&node) {
                if !distances.contains_key(neighbor) {
                    // Dangling edge reference: the neighbor was never
                    // registered as a graph node. Register it as an implicit
                    // isolated node instead of failing the solve.
                    warn!(
                        "edge {node:?} -> {neighbor:?} references a node missing from the graph; \
                         treating it as an isolated node"
                    );
                }

                let candidate = distance + weight;
                let improved = match distances.get(neighbor) {
                    Some(Some(known)) => candidate < *known,
                    _ => true,
                };
                if improved {
                    distances.insert(neighbor.clone(), Some(candidate));
                    predecessors.insert(neighbor.clone(), Some(node.clone()));
                    frontier.push(neighbor.clone(), candidate);
                }
            }
        }

        Ok(ShortestPathResult {
            origin: origin.clone(),
            distances,
            predecessors,
        })
    }
}
