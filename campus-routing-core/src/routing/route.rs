//! Route calculation entry point: snap, search, format.

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::model::{CampusGraph, CampusSnapshot};
use crate::routing::dijkstra::shortest_path;
use crate::routing::itinerary::build_itinerary;
use crate::snap::{MAX_SNAP_DISTANCE_M, nearest_node};
use crate::{Endpoint, Error, NodeId};

/// A route calculation request, in floating-point degrees.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RouteRequest {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
}

/// Tunable limits for a route calculation.
#[derive(Debug, Clone, Copy)]
pub struct RoutingConfig {
    /// Snap radius in meters; query points farther than this from every
    /// candidate node are unroutable.
    pub snap_radius_m: f64,
    /// Optional cap on total path distance in meters, bounding worst-case
    /// search latency on large graphs.
    pub max_route_distance_m: Option<f64>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            snap_radius_m: MAX_SNAP_DISTANCE_M,
            max_route_distance_m: None,
        }
    }
}

/// The node an endpoint snapped to, as reported back to the requester.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeRef {
    pub id: NodeId,
    pub name: String,
}

/// A computed walking route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    /// `[lat, lng]` per node, start to end.
    pub path: Vec<[f64; 2]>,
    /// Total distance in meters, one decimal.
    pub distance: f64,
    /// Total walking time in seconds, one decimal.
    pub time: f64,
    /// Number of edges traversed.
    pub steps: usize,
    pub start_node: NodeRef,
    pub end_node: NodeRef,
}

/// Computes the walking route between the request's two coordinates.
///
/// Both endpoints snap to the nearest outdoor node within the configured
/// radius; the search runs over the snapshot's bidirectional edges. The
/// failure modes ([`Error::NoNearbyNode`], [`Error::NoPath`]) are expected
/// outcomes the caller reports to the requester, not faults.
///
/// The adjacency structure is rebuilt from the snapshot on every call.
pub fn calculate_route(
    snapshot: &CampusSnapshot,
    config: &RoutingConfig,
    request: &RouteRequest,
) -> Result<RouteSummary, Error> {
    let start_point = Point::new(request.start_lng, request.start_lat);
    let end_point = Point::new(request.end_lng, request.end_lat);

    let (start_node, start_offset) =
        nearest_node(snapshot.outdoor_nodes(), start_point, config.snap_radius_m)
            .ok_or(Error::NoNearbyNode(Endpoint::Start))?;
    let (end_node, end_offset) =
        nearest_node(snapshot.outdoor_nodes(), end_point, config.snap_radius_m)
            .ok_or(Error::NoNearbyNode(Endpoint::End))?;

    log::debug!(
        "Snapped request to nodes {} ({:.1} m) and {} ({:.1} m)",
        start_node.id,
        start_offset,
        end_node.id,
        end_offset
    );

    let graph = CampusGraph::from_edges(&snapshot.edges);
    let path = shortest_path(
        &graph,
        start_node.id,
        end_node.id,
        config.max_route_distance_m,
    )
    .ok_or(Error::NoPath)?;

    let itinerary = build_itinerary(&path.nodes, snapshot);

    Ok(RouteSummary {
        path: itinerary.path,
        distance: itinerary.distance_m,
        time: itinerary.time_s,
        steps: itinerary.steps,
        start_node: NodeRef {
            id: start_node.id,
            name: start_node.name.clone(),
        },
        end_node: NodeRef {
            id: end_node.id,
            name: end_node.name.clone(),
        },
    })
}
