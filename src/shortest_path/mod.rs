//! Shortest-path engine.
//!
//! - [`dijkstra`] — single-source Dijkstra over the complete graph, O(N²)
//! - [`all_shortest_paths`] — one Dijkstra run per source, every unordered
//!   pair extracted into an [`AllPairs`] result set

mod all_pairs;
mod dijkstra;

pub use all_pairs::{all_shortest_paths, AllPairs};
pub use dijkstra::{dijkstra, ShortestPathTree};
