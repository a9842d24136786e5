//! Single-source Dijkstra.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::models::Graph;

/// Heap entry: candidate cost to reach a node.
///
/// Ordered as a min-heap on cost, ties broken by node index so the pop
/// order (and therefore every tie-break downstream) is stable run to run.
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    node: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour on BinaryHeap.
        other
            .cost
            .partial_cmp(&self.cost)
            .expect("costs are finite")
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path tree rooted at a single source node.
///
/// Holds the distance to every node and the predecessor array from which
/// paths are reconstructed. Unreachable nodes have infinite distance and no
/// predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    source: usize,
    dist: Vec<f64>,
    prev: Vec<Option<usize>>,
}

impl ShortestPathTree {
    /// The source node this tree is rooted at.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Shortest distance from the source to `target`, or `None` if
    /// unreachable.
    pub fn distance(&self, target: usize) -> Option<f64> {
        let d = *self.dist.get(target)?;
        d.is_finite().then_some(d)
    }

    /// Reconstructs the node sequence from the source to `target`.
    ///
    /// Returns `None` if `target` is unreachable or out of bounds.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;
        let mut nodes = vec![target];
        let mut current = target;
        while let Some(prev) = self.prev[current] {
            nodes.push(prev);
            current = prev;
        }
        nodes.reverse();
        (nodes[0] == self.source).then_some(nodes)
    }
}

/// Runs Dijkstra's algorithm from `source` over the whole graph.
///
/// All edge weights are non-negative by the graph's construction invariant.
/// Relaxation uses strict `<`, so among equal-weight paths the first one
/// discovered under the fixed node visitation order wins; repeated runs on
/// the same graph produce identical trees.
///
/// # Panics
///
/// Panics if `source` is out of bounds.
pub fn dijkstra(graph: &Graph, source: usize) -> ShortestPathTree {
    let n = graph.len();
    assert!(source < n, "source index out of bounds");

    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if cost > dist[node] {
            continue; // stale entry
        }
        for next in 0..n {
            if next == node {
                continue;
            }
            let next_cost = cost + graph.weight(node, next);
            if next_cost < dist[next] {
                dist[next] = next_cost;
                prev[next] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    ShortestPathTree { source, dist, prev }
}
