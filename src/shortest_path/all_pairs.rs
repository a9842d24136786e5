//! All-pairs shortest paths over the complete graph.

use itertools::Itertools;

use super::dijkstra;
use crate::error::{GraphError, GraphResult};
use crate::models::{Graph, PathResult};

/// Shortest paths for every unordered pair of distinct nodes.
///
/// Pairs are enumerated in the point set's insertion order (`a < b` by
/// index), the same order [`AllPairs::iter`] yields them in. A pair with no
/// connecting path is held as an explicit absence, never dropped; on
/// complete graphs every pair is present.
///
/// # Examples
///
/// ```
/// use tourney_routing::models::{Graph, Point, PointSet};
/// use tourney_routing::distance::euclidean;
/// use tourney_routing::shortest_path::all_shortest_paths;
///
/// let points = PointSet::new(vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 0.0, 1.0),
///     Point::new("C", 1.0, 1.0),
/// ]).unwrap();
/// let graph = Graph::build(points, euclidean).unwrap();
/// let paths = all_shortest_paths(&graph);
/// assert_eq!(paths.len(), 3);
/// let ac = paths.get(0, 2).unwrap();
/// assert!((ac.weight() - 2.0_f64.sqrt()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairs {
    size: usize,
    names: Vec<String>,
    results: Vec<Option<PathResult>>,
}

impl AllPairs {
    /// Triangular index of the pair `(a, b)` with `a < b`.
    fn pair_index(&self, a: usize, b: usize) -> usize {
        a * self.size - a * (a + 1) / 2 + (b - a - 1)
    }

    /// Number of unordered pairs (N·(N−1)/2).
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if the graph had fewer than two nodes.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Shortest path between two nodes, order-insensitive.
    ///
    /// Returns `None` for an unreachable pair or for `a == b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, a: usize, b: usize) -> Option<&PathResult> {
        assert!(a < self.size && b < self.size, "node index out of bounds");
        if a == b {
            return None;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        self.results[self.pair_index(lo, hi)].as_ref()
    }

    /// Like [`get`](Self::get), but an unreachable pair is a
    /// [`GraphError::NoRoute`] naming both points.
    pub fn require(&self, a: usize, b: usize) -> GraphResult<&PathResult> {
        self.get(a, b).ok_or_else(|| GraphError::NoRoute {
            from: self.names[a].clone(),
            to: self.names[b].clone(),
        })
    }

    /// Name of the node at the given index.
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Iterates all pairs in deterministic order, absences included.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Option<&PathResult>)> {
        (0..self.size)
            .tuple_combinations()
            .map(move |(a, b)| ((a, b), self.results[self.pair_index(a, b)].as_ref()))
    }
}

/// Computes the shortest path for every unordered pair of distinct nodes.
///
/// Runs Dijkstra once per source node and extracts the path to every
/// higher-indexed target — O(N²) source-runs, fine at tens of nodes. The
/// real algorithm runs even though the graph is complete: under a
/// non-metric distance function the shortest path may legitimately route
/// through intermediate nodes, and this engine must find it.
pub fn all_shortest_paths(graph: &Graph) -> AllPairs {
    let n = graph.len();
    let names = (0..n).map(|i| graph.name(i).to_string()).collect();
    let mut results = Vec::with_capacity(n * (n - 1) / 2);

    for source in 0..n {
        let tree = dijkstra(graph, source);
        for target in (source + 1)..n {
            let result = tree
                .path_to(target)
                .and_then(|nodes| Some(PathResult::new(nodes, tree.distance(target)?)));
            results.push(result);
        }
    }

    AllPairs {
        size: n,
        names,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::euclidean;
    use crate::models::{Point, PointSet};
    use proptest::prelude::*;

    fn triangle_graph() -> Graph {
        let points = PointSet::new(vec![
            Point::new("A", 0.0, 0.0),
            Point::new("B", 0.0, 1.0),
            Point::new("C", 1.0, 1.0),
        ])
        .expect("valid");
        Graph::build(points, euclidean).expect("valid")
    }

    #[test]
    fn test_pair_count() {
        let paths = all_shortest_paths(&triangle_graph());
        assert_eq!(paths.len(), 3);
        assert_eq!(paths.iter().count(), 3);
    }

    #[test]
    fn test_concrete_scenario() {
        // A(0,0), B(0,1), C(1,1): AB = 1, BC = 1, AC = √2. The direct A-C
        // edge beats the A→B→C detour (2 > √2).
        let paths = all_shortest_paths(&triangle_graph());
        let ac = paths.get(0, 2).expect("reachable");
        assert!((ac.weight() - 2.0_f64.sqrt()).abs() < 1e-9);
        assert_eq!(ac.nodes(), &[0, 2]);
    }

    #[test]
    fn test_get_order_insensitive() {
        let paths = all_shortest_paths(&triangle_graph());
        let ab = paths.get(0, 1).expect("reachable");
        let ba = paths.get(1, 0).expect("reachable");
        assert_eq!(ab, ba);
        assert!(paths.get(1, 1).is_none());
    }

    #[test]
    fn test_require_found() {
        let paths = all_shortest_paths(&triangle_graph());
        assert!(paths.require(0, 1).is_ok());
    }

    #[test]
    fn test_require_same_node_is_no_route() {
        let paths = all_shortest_paths(&triangle_graph());
        let err = paths.require(2, 2).expect_err("no self route");
        assert_eq!(
            err,
            GraphError::NoRoute {
                from: "C".to_string(),
                to: "C".to_string(),
            }
        );
    }

    #[test]
    fn test_paths_are_real_edges() {
        let paths = all_shortest_paths(&triangle_graph());
        for ((a, b), result) in paths.iter() {
            let path = result.expect("complete graph");
            assert_eq!(path.source(), a);
            assert_eq!(path.target(), b);
            assert!(path.len() >= 2);
        }
    }

    #[test]
    fn test_single_node() {
        let points = PointSet::new(vec![Point::new("Solo", 0.0, 0.0)]).expect("valid");
        let graph = Graph::build(points, euclidean).expect("valid");
        let paths = all_shortest_paths(&graph);
        assert!(paths.is_empty());
        assert_eq!(paths.len(), 0);
    }

    fn arb_graph(max: usize) -> impl Strategy<Value = Graph> {
        prop::collection::vec((-80.0..80.0f64, -170.0..170.0f64), 2..max).prop_map(|coords| {
            let points = coords
                .into_iter()
                .enumerate()
                .map(|(i, (lat, lon))| Point::new(format!("P{i}"), lat, lon))
                .collect();
            let set = PointSet::new(points).expect("generated names are unique");
            Graph::build(set, euclidean).expect("euclidean is finite")
        })
    }

    proptest! {
        #[test]
        fn prop_never_longer_than_direct_edge(graph in arb_graph(10)) {
            let paths = all_shortest_paths(&graph);
            for ((a, b), result) in paths.iter() {
                let path = result.expect("complete graph");
                prop_assert!(path.weight() <= graph.weight(a, b) + 1e-9);
            }
        }

        #[test]
        fn prop_direct_under_metric(graph in arb_graph(10)) {
            // Euclidean distance is a metric, so the direct edge is optimal.
            let paths = all_shortest_paths(&graph);
            for ((a, b), result) in paths.iter() {
                let path = result.expect("complete graph");
                prop_assert!((path.weight() - graph.weight(a, b)).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_deterministic(graph in arb_graph(10)) {
            let first = all_shortest_paths(&graph);
            let second = all_shortest_paths(&graph);
            prop_assert_eq!(first, second);
        }
    }
}
