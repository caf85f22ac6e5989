//! Route computation: shortest-path search and itinerary formatting.

pub mod dijkstra;
pub mod itinerary;
pub mod route;

pub use dijkstra::{ShortestPath, shortest_path};
pub use itinerary::{Itinerary, build_itinerary};
pub use route::{NodeRef, RouteRequest, RouteSummary, RoutingConfig, calculate_route};
