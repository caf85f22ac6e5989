//! Data model for the campus path network.

pub mod components;
pub mod graph;
pub mod snapshot;

pub use components::{LocationBinding, NodeCategory, PathEdge, PathNode, PathType};
pub use graph::CampusGraph;
pub use snapshot::CampusSnapshot;
