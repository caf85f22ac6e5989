//! Routing graph built from the persisted edge set.

use std::collections::BTreeSet;

use hashbrown::HashMap;
use petgraph::Undirected;
use petgraph::graph::{Graph, NodeIndex};

use super::components::PathEdge;
use crate::NodeId;

/// Adjacency structure over the bidirectional edges of a snapshot.
///
/// Unidirectional edges are excluded from routing entirely, matching the
/// behavior of the production routing endpoint (the directionality flag is
/// stored but never produces one-way adjacency). Nodes with no surviving
/// edges are simply absent.
///
/// The graph is rebuilt from the edge set on every route request, so a query
/// costs O(E) before the search even starts. Acceptable at campus scale;
/// a cached incremental graph is the known next step if the edge set grows.
pub struct CampusGraph {
    graph: Graph<NodeId, f64, Undirected>,
    index: HashMap<NodeId, NodeIndex>,
}

impl CampusGraph {
    /// Builds the adjacency structure from all edges flagged bidirectional.
    pub fn from_edges(edges: &[PathEdge]) -> Self {
        let kept: Vec<&PathEdge> = edges.iter().filter(|edge| edge.bidirectional).collect();
        let skipped = edges.len() - kept.len();
        if skipped > 0 {
            log::debug!("Excluding {skipped} unidirectional edges from the routing graph");
        }

        // Endpoint ids in ascending order. NodeIndex values are assigned in
        // insertion order, so index order matches id order; the Dijkstra
        // tie-break compares NodeIndex and relies on this.
        let ids: BTreeSet<NodeId> = kept
            .iter()
            .flat_map(|edge| [edge.node_a, edge.node_b])
            .collect();

        let mut graph = Graph::new_undirected();
        let mut index = HashMap::with_capacity(ids.len());
        for id in ids {
            index.insert(id, graph.add_node(id));
        }

        for edge in kept {
            let a = index[&edge.node_a];
            let b = index[&edge.node_b];
            graph.add_edge(a, b, edge.distance_m);
        }

        Self { graph, index }
    }

    pub fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub fn node_id(&self, index: NodeIndex) -> NodeId {
        self.graph[index]
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) fn inner(&self) -> &Graph<NodeId, f64, Undirected> {
        &self.graph
    }
}
