//! Path network components - nodes, edges and marker bindings.

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::geodesic::{haversine_distance, walking_time};
use crate::{MarkerId, NodeId};

/// Kind of walkable point a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Intersection,
    Entrance,
    Stair,
    Ramp,
    Landmark,
}

/// Kind of path segment an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathType {
    Sidewalk,
    Pedestrian,
    Stair,
    Ramp,
    Hallway,
}

/// A routable point in the pedestrian path graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathNode {
    pub id: NodeId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub category: NodeCategory,
    pub indoor: bool,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub floor: Option<i32>,
}

impl PathNode {
    /// Node position as a `geo` point (x = lng, y = lat).
    pub fn position(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

/// A weighted connection between two nodes.
///
/// `distance_m` and `walking_time_s` are derived once when the edge is
/// created and are NOT recomputed if an endpoint's coordinates are edited
/// later. Consumers must treat the stored values as authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathEdge {
    pub id: i64,
    pub node_a: NodeId,
    pub node_b: NodeId,
    pub distance_m: f64,
    pub walking_time_s: f64,
    /// Traversable in both directions with identical weight when true,
    /// only A -> B when false.
    pub bidirectional: bool,
    pub path_type: PathType,
    pub indoor: bool,
}

impl PathEdge {
    /// Distance and walking time for a new edge between two nodes, from
    /// their current coordinates. Creation-time use only.
    pub fn derive_metrics(a: &PathNode, b: &PathNode) -> (f64, f64) {
        let distance = haversine_distance(a.position(), b.position());
        (distance, walking_time(distance))
    }
}

/// Association from a point-of-interest marker to its nearest routable node.
/// At most one binding exists per (marker, node) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationBinding {
    pub id: i64,
    pub marker_id: MarkerId,
    pub node_id: NodeId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesic::WALKING_SPEED_MPS;

    fn node(id: NodeId, lat: f64, lng: f64) -> PathNode {
        PathNode {
            id,
            name: format!("node {id}"),
            lat,
            lng,
            category: NodeCategory::Intersection,
            indoor: false,
            building: None,
            floor: None,
        }
    }

    #[test]
    fn derived_metrics_agree_with_walking_speed() {
        let a = node(1, 7.2544, 80.5906);
        let b = node(2, 7.2560, 80.5955);
        let (distance, time) = PathEdge::derive_metrics(&a, &b);
        assert!(distance > 0.0);
        assert!((time - distance / WALKING_SPEED_MPS).abs() < 1e-9);
    }

    #[test]
    fn node_json_round_trips_optional_fields() {
        let json = r#"{
            "id": 5, "name": "Library entrance", "lat": 7.2544, "lng": 80.5906,
            "category": "entrance", "indoor": false
        }"#;
        let n: PathNode = serde_json::from_str(json).unwrap();
        assert_eq!(n.category, NodeCategory::Entrance);
        assert_eq!(n.building, None);
        assert_eq!(n.floor, None);
    }
}
