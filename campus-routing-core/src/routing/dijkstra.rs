//! Shortest-path search over the campus graph.

use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::NodeId;
use crate::model::CampusGraph;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap). Equal costs pop
// the lower NodeIndex first, which is the lower node id per CampusGraph's
// insertion invariant, so equal-cost routes are reproducible.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered node path with its total weight in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub nodes: Vec<NodeId>,
    pub total_distance_m: f64,
}

/// Dijkstra's algorithm from `start` to `goal`, over non-negative distance
/// weights. Returns `None` when no path exists, including when either
/// endpoint has no edges and is therefore absent from the graph.
///
/// `max_cost` bounds the search radius in meters; paths longer than the
/// bound are reported as unreachable.
pub fn shortest_path(
    graph: &CampusGraph,
    start: NodeId,
    goal: NodeId,
    max_cost: Option<f64>,
) -> Option<ShortestPath> {
    let start_idx = graph.node_index(start)?;
    let goal_idx = graph.node_index(goal)?;

    let estimated = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated);
    let mut heap = BinaryHeap::with_capacity(estimated / 4);

    distances.insert(start_idx, 0.0);
    heap.push(State {
        cost: 0.0,
        node: start_idx,
    });

    let mut reached_goal = start_idx == goal_idx;

    while let Some(State { cost, node }) = heap.pop() {
        // Costs pop in ascending order, so the first entry over the bound
        // ends the search
        if let Some(max) = max_cost {
            if cost > max {
                break;
            }
        }

        if node == goal_idx {
            reached_goal = true;
            break;
        }

        // Stale heap entry for a node already settled with a better cost
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.inner().edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight();

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    if !reached_goal {
        return None;
    }

    // Follow predecessors backward from the goal
    let mut indices = vec![goal_idx];
    let mut current = goal_idx;
    while current != start_idx {
        current = *predecessors.get(&current)?;
        indices.push(current);
    }
    indices.reverse();

    Some(ShortestPath {
        nodes: indices.iter().map(|&idx| graph.node_id(idx)).collect(),
        total_distance_m: distances[&goal_idx],
    })
}
