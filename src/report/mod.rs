//! Network summary handed off to a map renderer.
//!
//! - [`NetworkSummary`] — node set + MST edge set + view center, pure data

mod summary;

pub use summary::{EdgeRecord, NetworkSummary, PointRecord};
