//! Pedestrian routing core for the campus navigation service.
//!
//! The library computes walking routes between arbitrary coordinates over a
//! snapshot of the campus path graph: query points are snapped to the nearest
//! routable node, the shortest path is found with Dijkstra's algorithm and the
//! result is formatted as a polyline with aggregate distance and walking time.
//!
//! The core holds no ambient state. Callers load a [`CampusSnapshot`] (or
//! receive one from the persistence layer) and pass it to every query; the
//! adjacency structure is rebuilt per request, so concurrent requests never
//! share mutable state.

pub mod error;
pub mod geodesic;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod snap;

pub use error::{Endpoint, Error};
pub use model::{CampusGraph, CampusSnapshot};

/// Identifier of a path graph node, as assigned by the persistence layer.
pub type NodeId = i64;

/// Identifier of a point-of-interest marker.
pub type MarkerId = i64;
