//! Shared test fixtures.

use crate::models::{Point, PointSet};

/// The 20-school dataset the engine was originally built for, true
/// geographic coordinates.
pub(crate) fn schools() -> PointSet {
    PointSet::new(vec![
        Point::new("American Canyon", 38.16758, -122.23883),
        Point::new("St Marys", 37.888308, -122.28354),
        Point::new("St Patrick", 38.08716, -122.20248),
        Point::new("Rodriguez", 38.19977, -122.14580),
        Point::new("Jesse Bethel", 38.12048, -122.20775),
        Point::new("Benicia", 38.06512, -122.17585),
        Point::new("FairField", 38.27802, -122.03089),
        Point::new("Vanden", 38.28229, -121.96281),
        Point::new("Salesian", 37.95316, -122.34087),
        Point::new("Napa", 38.31148, -122.29703),
        Point::new("Vintage", 38.33333, -122.30462),
        Point::new("St Helena", 38.49681, -122.46265),
        Point::new("College Prep", 37.84862, -122.23983),
        Point::new("Vallejo", 38.11600, -122.24595),
        Point::new("Petaluma", 38.22772, -122.64636),
        Point::new("Sonoma", 38.28270, -122.45788),
        Point::new("Albany", 37.89600, -122.29219),
        Point::new("Oakland Tech", 37.83252, -122.25455),
        Point::new("El Cerito", 37.90820, -122.29529),
        Point::new("Novato", 38.08944, -122.57322),
    ])
    .expect("school fixture is valid")
}
