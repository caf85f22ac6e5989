//! Snapping arbitrary coordinates to the nearest routable node.

use geo::Point;

use crate::geodesic::haversine_distance;
use crate::model::PathNode;

/// Maximum distance at which a query point snaps to a node. Beyond this the
/// point is considered unroutable.
pub const MAX_SNAP_DISTANCE_M: f64 = 100.0;

/// Nearest candidate node to `point`, with its distance in meters, provided
/// that distance is strictly below `max_distance_m`.
///
/// Ties go to the first candidate reaching the minimum, so the result is
/// stable for a fixed candidate order. `None` means no node is close enough,
/// which is a legitimate outcome rather than an error.
pub fn nearest_node<'a, I>(
    candidates: I,
    point: Point<f64>,
    max_distance_m: f64,
) -> Option<(&'a PathNode, f64)>
where
    I: IntoIterator<Item = &'a PathNode>,
{
    let mut best: Option<(&PathNode, f64)> = None;
    for node in candidates {
        let distance = haversine_distance(point, node.position());
        if distance < max_distance_m
            && best.is_none_or(|(_, best_distance)| distance < best_distance)
        {
            best = Some((node, distance));
        }
    }
    best
}
