//! Domain model types for the travel-distance engine.
//!
//! Provides the core data: named geographic points with validated
//! coordinates, the complete weighted graph built over them, and the
//! shortest-path result type shared by the engines.

mod graph;
mod path;
mod point;

pub use graph::{Edge, Graph};
pub use path::PathResult;
pub use point::{Coord, Point, PointSet};
