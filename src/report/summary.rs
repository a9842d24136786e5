//! Renderer handoff data.

use serde::Serialize;

use crate::models::{Coord, Graph};
use crate::mst::SpanningTree;

/// A point as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRecord {
    /// Point name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// An MST edge as the renderer sees it, endpoints by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    /// Name of one endpoint.
    pub from: String,
    /// Name of the other endpoint.
    pub to: String,
    /// Travel distance between the endpoints.
    pub weight: f64,
}

/// Everything a map renderer needs to draw the network: the node set, the
/// MST edge set, the tree's total weight, and the coordinate mean to
/// center the view on.
///
/// Pure data — rendering itself lives outside this crate.
///
/// # Examples
///
/// ```
/// use tourney_routing::models::{Graph, Point, PointSet};
/// use tourney_routing::distance::euclidean;
/// use tourney_routing::mst::minimum_spanning_tree;
/// use tourney_routing::report::NetworkSummary;
///
/// let points = PointSet::new(vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 0.0, 2.0),
/// ]).unwrap();
/// let graph = Graph::build(points, euclidean).unwrap();
/// let tree = minimum_spanning_tree(&graph).unwrap();
/// let summary = NetworkSummary::from_mst(&graph, &tree);
/// assert_eq!(summary.points().len(), 2);
/// assert_eq!(summary.edges().len(), 1);
/// assert_eq!(summary.center().lon(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    center: Coord,
    points: Vec<PointRecord>,
    edges: Vec<EdgeRecord>,
    total_weight: f64,
}

impl NetworkSummary {
    /// Snapshots the graph's points and the tree's edges for rendering.
    pub fn from_mst(graph: &Graph, tree: &SpanningTree) -> Self {
        let n = graph.len();
        let points: Vec<PointRecord> = graph
            .points()
            .iter()
            .map(|p| PointRecord {
                name: p.name().to_string(),
                lat: p.coord().lat(),
                lon: p.coord().lon(),
            })
            .collect();
        let center = Coord::new(
            points.iter().map(|p| p.lat).sum::<f64>() / n as f64,
            points.iter().map(|p| p.lon).sum::<f64>() / n as f64,
        );
        let edges = tree
            .edges()
            .iter()
            .map(|e| EdgeRecord {
                from: graph.name(e.a).to_string(),
                to: graph.name(e.b).to_string(),
                weight: e.weight,
            })
            .collect();
        Self {
            center,
            points,
            edges,
            total_weight: tree.total_weight(),
        }
    }

    /// Arithmetic mean of the point coordinates.
    pub fn center(&self) -> Coord {
        self.center
    }

    /// The node set.
    pub fn points(&self) -> &[PointRecord] {
        &self.points
    }

    /// The MST edge set.
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Total weight of the spanning tree.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Serializes the summary to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
