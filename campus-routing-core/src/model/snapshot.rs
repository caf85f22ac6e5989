//! Read-only snapshot of the persisted path network.

use hashbrown::HashMap;

use super::components::{LocationBinding, PathEdge, PathNode};
use crate::{MarkerId, NodeId};

/// The node, edge and binding sets a single routing request operates on.
///
/// The snapshot is handed to the core by the caller; the core never reaches
/// into database handles or other ambient state. Administrative writes may
/// race with snapshot reads on the persistence side, so a snapshot is only
/// ever as fresh as the moment it was taken.
#[derive(Debug, Clone, Default)]
pub struct CampusSnapshot {
    pub nodes: Vec<PathNode>,
    pub edges: Vec<PathEdge>,
    pub bindings: Vec<LocationBinding>,
}

impl CampusSnapshot {
    pub fn new(
        nodes: Vec<PathNode>,
        edges: Vec<PathEdge>,
        bindings: Vec<LocationBinding>,
    ) -> Self {
        Self {
            nodes,
            edges,
            bindings,
        }
    }

    pub fn node_by_id(&self, id: NodeId) -> Option<&PathNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Nodes eligible for outdoor routing, in snapshot order.
    pub fn outdoor_nodes(&self) -> impl Iterator<Item = &PathNode> {
        self.nodes.iter().filter(|node| !node.indoor)
    }

    /// Nodes a marker is bound to, in binding order. Destination lookups
    /// enter the graph through these.
    pub fn nodes_for_marker(&self, marker_id: MarkerId) -> Vec<&PathNode> {
        let by_id: HashMap<NodeId, &PathNode> =
            self.nodes.iter().map(|node| (node.id, node)).collect();
        self.bindings
            .iter()
            .filter(|binding| binding.marker_id == marker_id)
            .filter_map(|binding| by_id.get(&binding.node_id).copied())
            .collect()
    }
}
