//! Minimum spanning tree engine.
//!
//! - [`minimum_spanning_tree`] — Kruskal's algorithm, O(E log E)
//! - [`UnionFind`] — disjoint-set cycle detection backing it

mod kruskal;
mod union_find;

pub use kruskal::{minimum_spanning_tree, SpanningTree};
pub use union_find::UnionFind;
