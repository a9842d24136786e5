//! Round-robin schedule rendering.

use std::fmt;

use serde::Serialize;

use crate::shortest_path::AllPairs;

/// A single match-up in the round-robin schedule.
///
/// Display fields only: the distance is rounded to two decimals for
/// presentation, while the engine keeps full precision internally.
/// Serializes with camelCase keys (`matchUp`, `path`, `distance`) for
/// external consumers.
///
/// # Examples
///
/// ```
/// use tourney_routing::models::{Graph, Point, PointSet};
/// use tourney_routing::distance::euclidean;
/// use tourney_routing::shortest_path::all_shortest_paths;
/// use tourney_routing::schedule::round_robin;
///
/// let points = PointSet::new(vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 3.0, 4.0),
/// ]).unwrap();
/// let graph = Graph::build(points, euclidean).unwrap();
/// let schedule = round_robin(&all_shortest_paths(&graph));
/// assert_eq!(schedule.len(), 1);
/// assert_eq!(schedule[0].match_up(), "A vs B");
/// assert_eq!(schedule[0].path(), "A -> B");
/// assert_eq!(schedule[0].distance(), "5.00 km");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    match_up: String,
    path: String,
    distance: String,
}

impl ScheduleEntry {
    /// Match-up label, `"A vs B"`.
    pub fn match_up(&self) -> &str {
        &self.match_up
    }

    /// Path trace, `"A -> C -> B"`, or `"no route"` for an unreachable
    /// pair.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Presentation distance, `"12.34 km"`, or `"n/a"` for an unreachable
    /// pair.
    pub fn distance(&self) -> &str {
        &self.distance
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (Distance: {})",
            self.match_up, self.path, self.distance
        )
    }
}

/// Renders the all-pairs results into an ordered round-robin schedule.
///
/// One entry per unordered pair, in the result set's deterministic pair
/// order — N·(N−1)/2 entries for N points. An unreachable pair becomes an
/// explicit "no route" entry rather than being dropped.
pub fn round_robin(paths: &AllPairs) -> Vec<ScheduleEntry> {
    paths
        .iter()
        .map(|((a, b), result)| {
            let match_up = format!("{} vs {}", paths.name(a), paths.name(b));
            match result {
                Some(path) => ScheduleEntry {
                    match_up,
                    path: path
                        .nodes()
                        .iter()
                        .map(|&i| paths.name(i))
                        .collect::<Vec<_>>()
                        .join(" -> "),
                    distance: format!("{:.2} km", path.weight()),
                },
                None => ScheduleEntry {
                    match_up,
                    path: "no route".to_string(),
                    distance: "n/a".to_string(),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{euclidean, haversine};
    use crate::models::{Graph, Point, PointSet};
    use crate::shortest_path::all_shortest_paths;
    use crate::test_util::schools;

    fn triangle_schedule() -> Vec<ScheduleEntry> {
        let points = PointSet::new(vec![
            Point::new("A", 0.0, 0.0),
            Point::new("B", 0.0, 1.0),
            Point::new("C", 1.0, 1.0),
        ])
        .expect("valid");
        let graph = Graph::build(points, euclidean).expect("valid");
        round_robin(&all_shortest_paths(&graph))
    }

    #[test]
    fn test_entry_per_pair_in_order() {
        let schedule = triangle_schedule();
        let labels: Vec<&str> = schedule.iter().map(|e| e.match_up()).collect();
        assert_eq!(labels, vec!["A vs B", "A vs C", "B vs C"]);
    }

    #[test]
    fn test_presentation_rounding() {
        let schedule = triangle_schedule();
        // A-C is √2 ≈ 1.41421..., rendered at two decimals.
        assert_eq!(schedule[1].distance(), "1.41 km");
        assert_eq!(schedule[0].distance(), "1.00 km");
    }

    #[test]
    fn test_display_line() {
        let schedule = triangle_schedule();
        assert_eq!(
            schedule[0].to_string(),
            "A vs B: A -> B (Distance: 1.00 km)"
        );
    }

    #[test]
    fn test_serialize_camel_case() {
        let schedule = triangle_schedule();
        let json = serde_json::to_string(&schedule[0]).expect("serializable");
        assert!(json.contains("\"matchUp\":\"A vs B\""));
        assert!(json.contains("\"path\":\"A -> B\""));
        assert!(json.contains("\"distance\":\"1.00 km\""));
    }

    #[test]
    fn test_school_season() {
        let graph = Graph::build(schools(), haversine).expect("valid");
        let schedule = round_robin(&all_shortest_paths(&graph));
        // 20 schools -> 190 match-ups.
        assert_eq!(schedule.len(), 190);
        assert!(schedule.iter().all(|e| e.distance().ends_with(" km")));
        assert_eq!(schedule[0].match_up(), "American Canyon vs St Marys");
    }

    #[test]
    fn test_schedule_deterministic() {
        let first = triangle_schedule();
        let second = triangle_schedule();
        assert_eq!(first, second);
    }
}
