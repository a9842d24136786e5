//! # tourney-routing
//!
//! Travel-distance graph engine for round-robin tournament scheduling.
//! Builds a complete weighted graph over a set of named geographic points,
//! computes all-pairs shortest travel paths, and derives a minimum
//! spanning tree connecting every point at minimum total distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coord, Point, PointSet, Graph, PathResult)
//! - [`distance`] — Distance functions (haversine great-circle, euclidean)
//! - [`shortest_path`] — Dijkstra and the all-pairs engine
//! - [`mst`] — Kruskal's minimum spanning tree with union-find
//! - [`schedule`] — Round-robin schedule rendering
//! - [`report`] — Network summary handed to a map renderer
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use tourney_routing::models::{Graph, PointSet};
//! use tourney_routing::distance::haversine;
//! use tourney_routing::shortest_path::all_shortest_paths;
//! use tourney_routing::mst::minimum_spanning_tree;
//! use tourney_routing::schedule::round_robin;
//! use tourney_routing::report::NetworkSummary;
//!
//! let doc = r#"{
//!     "Benicia": [38.06512, -122.17585],
//!     "Vallejo": [38.11600, -122.24595],
//!     "Napa": [38.31148, -122.29703]
//! }"#;
//! let points = PointSet::from_json(doc)?;
//! let graph = Graph::build(points, haversine)?;
//!
//! let schedule = round_robin(&all_shortest_paths(&graph));
//! assert_eq!(schedule.len(), 3);
//!
//! let tree = minimum_spanning_tree(&graph)?;
//! let summary = NetworkSummary::from_mst(&graph, &tree);
//! assert_eq!(summary.edges().len(), 2);
//! # Ok::<(), tourney_routing::error::GraphError>(())
//! ```

pub mod distance;
pub mod error;
pub mod models;
pub mod mst;
pub mod report;
pub mod schedule;
pub mod shortest_path;

#[cfg(test)]
pub(crate) mod test_util;
