//! Named geographic points and the validated point set.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// A latitude/longitude pair in floating-point degrees.
///
/// Plain data: distance computations live in [`crate::distance`].
///
/// # Examples
///
/// ```
/// use tourney_routing::models::Coord;
///
/// let c = Coord::new(38.16758, -122.23883);
/// assert_eq!(c.lat(), 38.16758);
/// assert_eq!(c.lon(), -122.23883);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    lat: f64,
    lon: f64,
}

impl Coord {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `true` if latitude is within [-90, 90] and longitude within
    /// [-180, 180].
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A named geographic point.
///
/// Identity is the name; coordinates are immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    name: String,
    coord: Coord,
}

impl Point {
    /// Creates a point from a name and coordinates in degrees.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            coord: Coord::new(lat, lon),
        }
    }

    /// The point's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The point's coordinates.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

/// An ordered set of points with unique names.
///
/// Insertion order is preserved and is the enumeration order used by every
/// downstream consumer (pair enumeration, schedule, report), which makes
/// outputs reproducible run to run.
///
/// # Examples
///
/// ```
/// use tourney_routing::models::{Point, PointSet};
///
/// let points = PointSet::new(vec![
///     Point::new("Napa", 38.31148, -122.29703),
///     Point::new("Vintage", 38.33333, -122.30462),
/// ]).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.index_of("Vintage"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Validates and wraps a list of points.
    ///
    /// Fails with [`GraphError::InvalidInput`] if the list is empty, a name
    /// occurs twice, or a coordinate is outside valid degree ranges.
    pub fn new(points: Vec<Point>) -> GraphResult<Self> {
        if points.is_empty() {
            return Err(GraphError::InvalidInput {
                message: "point set must contain at least one point".to_string(),
            });
        }
        let mut seen = std::collections::HashSet::new();
        for point in &points {
            if !seen.insert(point.name().to_string()) {
                return Err(GraphError::InvalidInput {
                    message: format!("duplicate point name '{}'", point.name()),
                });
            }
            if !point.coord().in_range() {
                return Err(GraphError::InvalidInput {
                    message: format!(
                        "coordinates ({}, {}) of '{}' are out of range",
                        point.coord().lat(),
                        point.coord().lon(),
                        point.name()
                    ),
                });
            }
        }
        Ok(Self { points })
    }

    /// Loads a point set from a JSON mapping of name to `[lat, lon]`.
    ///
    /// Key order in the document becomes the set's insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_routing::models::PointSet;
    ///
    /// let doc = r#"{"Benicia": [38.06512, -122.17585], "Vallejo": [38.116, -122.24595]}"#;
    /// let points = PointSet::from_json(doc).unwrap();
    /// assert_eq!(points.len(), 2);
    /// assert_eq!(points.get(0).unwrap().name(), "Benicia");
    /// ```
    pub fn from_json(doc: &str) -> GraphResult<Self> {
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(doc).map_err(|e| GraphError::Parse {
                message: e.to_string(),
            })?;
        let mut points = Vec::with_capacity(map.len());
        for (name, value) in map {
            let (lat, lon): (f64, f64) =
                serde_json::from_value(value).map_err(|e| GraphError::Parse {
                    message: format!("point '{}': {}", name, e),
                })?;
            points.push(Point::new(name, lat, lon));
        }
        Self::new(points)
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set has no points.
    ///
    /// Always `false` for a validated set; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at the given insertion index.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Returns the insertion index of the named point.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.points.iter().position(|p| p.name() == name)
    }

    /// Iterates points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}
