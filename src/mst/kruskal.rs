//! Kruskal's minimum spanning tree.

use super::UnionFind;
use crate::error::{GraphError, GraphResult};
use crate::models::{Edge, Graph};

/// A spanning tree: N−1 edges connecting all N nodes acyclically.
///
/// Produced by [`minimum_spanning_tree`], in which case the total weight is
/// minimal among all spanning trees of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: f64,
}

impl SpanningTree {
    /// Accepted edges in acceptance order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges (N−1 for an N-node graph, 0 for a single node).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the tree has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the accepted edge weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }
}

/// Normalized name pair of an edge, smaller name first. Sort key for
/// reproducible tie-breaks between equal-weight edges.
fn name_key<'a>(graph: &'a Graph, edge: &Edge) -> (&'a str, &'a str) {
    let a = graph.name(edge.a);
    let b = graph.name(edge.b);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// Edges are sorted ascending by weight, ties broken by the lexicographic
/// order of their endpoint names so repeated runs return the identical
/// tree. Each edge is accepted unless the union-find reports its endpoints
/// already connected; acceptance stops at N−1 edges.
///
/// A single-node graph yields an empty tree. A zero-node graph is
/// [`GraphError::EmptyGraph`].
///
/// # Examples
///
/// ```
/// use tourney_routing::models::{Graph, Point, PointSet};
/// use tourney_routing::distance::euclidean;
/// use tourney_routing::mst::minimum_spanning_tree;
///
/// let points = PointSet::new(vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 0.0, 1.0),
///     Point::new("C", 1.0, 1.0),
/// ]).unwrap();
/// let graph = Graph::build(points, euclidean).unwrap();
/// let tree = minimum_spanning_tree(&graph).unwrap();
/// assert_eq!(tree.len(), 2);
/// assert!((tree.total_weight() - 2.0).abs() < 1e-9);
/// ```
pub fn minimum_spanning_tree(graph: &Graph) -> GraphResult<SpanningTree> {
    let n = graph.len();
    if n == 0 {
        return Err(GraphError::EmptyGraph);
    }

    let mut candidates = graph.edges();
    candidates.sort_by(|x, y| {
        x.weight
            .partial_cmp(&y.weight)
            .expect("edge weights are finite")
            .then_with(|| name_key(graph, x).cmp(&name_key(graph, y)))
    });

    let mut uf = UnionFind::new(n);
    let mut edges = Vec::with_capacity(n - 1);
    let mut total_weight = 0.0;

    for edge in candidates {
        if uf.union(edge.a, edge.b) {
            total_weight += edge.weight;
            edges.push(edge);
            if edges.len() == n - 1 {
                break;
            }
        }
    }

    Ok(SpanningTree {
        edges,
        total_weight,
    })
}
