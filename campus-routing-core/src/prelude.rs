// Re-export key components
pub use crate::error::{Endpoint, Error};
pub use crate::geodesic::{WALKING_SPEED_MPS, haversine_distance, walking_time};
pub use crate::loading::{SnapshotConfig, load_snapshot};
pub use crate::model::{
    CampusGraph, CampusSnapshot, LocationBinding, NodeCategory, PathEdge, PathNode, PathType,
};
pub use crate::routing::{
    NodeRef, RouteRequest, RouteSummary, RoutingConfig, calculate_route, shortest_path,
};
pub use crate::snap::{MAX_SNAP_DISTANCE_M, nearest_node};

pub use crate::{MarkerId, NodeId};
