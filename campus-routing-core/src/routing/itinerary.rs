//! Turning a node path into a navigable route description.

use hashbrown::HashMap;
use itertools::Itertools;

use crate::NodeId;
use crate::model::{CampusSnapshot, PathEdge};

/// Aggregate route description for a node path.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// `[lat, lng]` per path node, in traversal order.
    pub path: Vec<[f64; 2]>,
    /// Sum of traversed edge distances in meters, one decimal.
    pub distance_m: f64,
    /// Sum of stored per-edge walking times in seconds, one decimal.
    pub time_s: f64,
    /// Edges traversed; always `path.len() - 1`.
    pub steps: usize,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Unordered endpoint pair used to match a traversed segment to its edge
/// record regardless of which endpoint is stored as A.
fn segment_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Builds the itinerary for `node_path`, consulting the snapshot's edge
/// records for per-segment distance and walking time.
///
/// Walking time is read from the stored edge field, never recomputed from
/// distance; administrative edits may have set it under a different speed
/// assumption. A segment with no matching edge record contributes zero to
/// both aggregates and is logged, while the polyline itself stays intact.
pub fn build_itinerary(node_path: &[NodeId], snapshot: &CampusSnapshot) -> Itinerary {
    let by_segment: HashMap<(NodeId, NodeId), &PathEdge> = snapshot
        .edges
        .iter()
        .map(|edge| (segment_key(edge.node_a, edge.node_b), edge))
        .collect();

    let path: Vec<[f64; 2]> = node_path
        .iter()
        .filter_map(|id| snapshot.node_by_id(*id))
        .map(|node| [node.lat, node.lng])
        .collect();

    let mut distance = 0.0;
    let mut time = 0.0;
    for (&from, &to) in node_path.iter().tuple_windows() {
        match by_segment.get(&segment_key(from, to)) {
            Some(edge) => {
                distance += edge.distance_m;
                time += edge.walking_time_s;
            }
            None => {
                log::warn!(
                    "No edge record for path segment {from} -> {to}; \
                     segment contributes zero distance and time"
                );
            }
        }
    }

    Itinerary {
        path,
        distance_m: round1(distance),
        time_s: round1(time),
        steps: node_path.len().saturating_sub(1),
    }
}
