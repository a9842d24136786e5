//! Complete weighted graph over a point set.

use itertools::Itertools;

use super::{Coord, Point, PointSet};
use crate::error::{GraphError, GraphResult};

/// An undirected weighted edge, endpoints given as point-set indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of one endpoint (always the smaller index).
    pub a: usize,
    /// Index of the other endpoint.
    pub b: usize,
    /// Travel distance between the endpoints.
    pub weight: f64,
}

/// A complete undirected weighted graph over a [`PointSet`].
///
/// Every pair of distinct points has exactly one edge whose weight is the
/// supplied distance function applied to the endpoint coordinates. Weights
/// are stored in a dense symmetric n×n matrix (row-major), built once and
/// read-only thereafter.
///
/// # Examples
///
/// ```
/// use tourney_routing::models::{Graph, Point, PointSet};
/// use tourney_routing::distance::euclidean;
///
/// let points = PointSet::new(vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 3.0, 4.0),
/// ]).unwrap();
/// let graph = Graph::build(points, euclidean).unwrap();
/// assert_eq!(graph.len(), 2);
/// assert!((graph.weight(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    points: PointSet,
    weights: Vec<f64>,
    size: usize,
}

impl Graph {
    /// Builds the complete graph by applying `distance_fn` to every
    /// unordered pair of points.
    ///
    /// Fails with [`GraphError::InvalidDistance`] naming the offending pair
    /// if the distance function returns a negative, NaN, or infinite value.
    /// A single-point set yields a graph with one node and no edges.
    pub fn build(
        points: PointSet,
        distance_fn: impl Fn(Coord, Coord) -> f64,
    ) -> GraphResult<Self> {
        let n = points.len();
        let mut weights = vec![0.0; n * n];
        for (i, j) in (0..n).tuple_combinations() {
            let a = points.get(i).expect("index within point set");
            let b = points.get(j).expect("index within point set");
            let d = distance_fn(a.coord(), b.coord());
            if !d.is_finite() || d < 0.0 {
                return Err(GraphError::InvalidDistance {
                    from: a.name().to_string(),
                    to: b.name().to_string(),
                    value: d,
                });
            }
            weights[i * n + j] = d;
            weights[j * n + i] = d;
        }
        Ok(Self {
            points,
            weights,
            size: n,
        })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the edge weight between two nodes.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn weight(&self, a: usize, b: usize) -> f64 {
        assert!(a < self.size && b < self.size, "node index out of bounds");
        self.weights[a * self.size + b]
    }

    /// Returns the point at the given node index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn point(&self, index: usize) -> &Point {
        self.points.get(index).expect("node index out of bounds")
    }

    /// Returns the name of the point at the given node index.
    pub fn name(&self, index: usize) -> &str {
        self.point(index).name()
    }

    /// The underlying point set.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// All edges in deterministic pair order (`a < b`, insertion index).
    pub fn edges(&self) -> Vec<Edge> {
        (0..self.size)
            .tuple_combinations()
            .map(|(a, b)| Edge {
                a,
                b,
                weight: self.weight(a, b),
            })
            .collect()
    }

    /// Returns `true` if the weight matrix is symmetric within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.size)
            .tuple_combinations()
            .all(|(a, b)| (self.weight(a, b) - self.weight(b, a)).abs() <= tol)
    }
}
