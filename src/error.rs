//! Error types for graph construction and queries.

use std::fmt;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised while loading points, building the graph, or querying
/// routes.
///
/// Structural errors (`InvalidInput`, `InvalidDistance`, `EmptyGraph`,
/// `Parse`) abort the run. `NoRoute` is per-pair: it marks a single
/// unreachable pair and leaves the rest of the batch intact.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Point set failed validation (empty set, duplicate name, coordinate
    /// out of range).
    InvalidInput {
        /// What was wrong, naming the violating point.
        message: String,
    },

    /// The distance function returned a negative, NaN, or infinite value.
    InvalidDistance {
        /// Name of one endpoint of the offending pair.
        from: String,
        /// Name of the other endpoint.
        to: String,
        /// The value the distance function returned.
        value: f64,
    },

    /// A spanning tree was requested on a graph with zero nodes.
    EmptyGraph,

    /// No path connects the requested pair.
    NoRoute {
        /// Name of the source point.
        from: String,
        /// Name of the target point.
        to: String,
    },

    /// The JSON input document could not be parsed.
    Parse {
        /// Underlying parser message.
        message: String,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { message } => {
                write!(f, "invalid input: {}", message)
            }
            Self::InvalidDistance { from, to, value } => {
                write!(
                    f,
                    "invalid distance {} between '{}' and '{}': distances must be finite and >= 0",
                    value, from, to
                )
            }
            Self::EmptyGraph => {
                write!(f, "graph has no nodes")
            }
            Self::NoRoute { from, to } => {
                write!(f, "no route between '{}' and '{}'", from, to)
            }
            Self::Parse { message } => {
                write!(f, "malformed point document: {}", message)
            }
        }
    }
}

impl std::error::Error for GraphError {}
