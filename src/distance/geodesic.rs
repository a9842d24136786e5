//! Ready-made distance functions.

use crate::models::Coord;

/// Mean Earth radius in kilometers (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two coordinates in kilometers.
///
/// Haversine formula over a spherical Earth of radius
/// [`EARTH_RADIUS_KM`]. Symmetric, non-negative, and zero exactly for
/// identical coordinates; satisfies the triangle inequality, so it is a
/// metric in the sense the shortest-path engine cares about.
///
/// # Examples
///
/// ```
/// use tourney_routing::models::Coord;
/// use tourney_routing::distance::haversine;
///
/// let napa = Coord::new(38.31148, -122.29703);
/// let vintage = Coord::new(38.33333, -122.30462);
/// let d = haversine(napa, vintage);
/// assert!(d > 2.0 && d < 3.0); // roughly 2.5 km apart
/// assert_eq!(haversine(napa, napa), 0.0);
/// ```
pub fn haversine(a: Coord, b: Coord) -> f64 {
    let lat_a = a.lat().to_radians();
    let lat_b = b.lat().to_radians();
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Plane (Euclidean) distance treating latitude/longitude as x/y.
///
/// Not geographically meaningful; intended for tests and for callers whose
/// coordinates are already planar.
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dx = a.lat() - b.lat();
    let dy = a.lon() - b.lon();
    (dx * dx + dy * dy).sqrt()
}
