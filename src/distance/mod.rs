//! Distance functions over geographic coordinates.
//!
//! The graph builder accepts any `Fn(Coord, Coord) -> f64`; this module
//! ships the two implementations the crate uses itself:
//!
//! - [`haversine`] — great-circle distance in kilometers, the production
//!   choice for latitude/longitude input
//! - [`euclidean`] — plane distance, used by tests and planar callers

mod geodesic;

pub use geodesic::{euclidean, haversine, EARTH_RADIUS_KM};
