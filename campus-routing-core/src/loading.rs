//! Loading a campus snapshot from the persistence layer's JSON exports.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use log::info;

use crate::model::{CampusSnapshot, LocationBinding, PathEdge, PathNode};
use crate::{Error, NodeId};

/// File locations for a snapshot export.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub nodes_path: PathBuf,
    pub edges_path: PathBuf,
    /// Marker bindings are optional; routing works without them.
    pub bindings_path: Option<PathBuf>,
}

/// Reads and validates a snapshot from the configured JSON files.
///
/// # Errors
///
/// Returns an error when a file is missing or unreadable, or when the data
/// violates the model invariants: an edge referencing a nonexistent node, or
/// a negative edge distance.
pub fn load_snapshot(config: &SnapshotConfig) -> Result<CampusSnapshot, Error> {
    validate_config(config)?;

    let nodes: Vec<PathNode> = read_json(&config.nodes_path)?;
    let edges: Vec<PathEdge> = read_json(&config.edges_path)?;
    let bindings: Vec<LocationBinding> = match &config.bindings_path {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    validate_edges(&nodes, &edges)?;

    info!(
        "Loaded snapshot: {} nodes, {} edges, {} bindings",
        nodes.len(),
        edges.len(),
        bindings.len()
    );

    Ok(CampusSnapshot::new(nodes, edges, bindings))
}

fn validate_config(config: &SnapshotConfig) -> Result<(), Error> {
    for path in [&config.nodes_path, &config.edges_path]
        .into_iter()
        .chain(config.bindings_path.as_ref())
    {
        if !path.exists() {
            return Err(Error::InvalidData(format!(
                "Snapshot file not found: {}",
                path.display()
            )));
        }
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn validate_edges(nodes: &[PathNode], edges: &[PathEdge]) -> Result<(), Error> {
    let ids: HashSet<NodeId> = nodes.iter().map(|node| node.id).collect();

    for edge in edges {
        for endpoint in [edge.node_a, edge.node_b] {
            if !ids.contains(&endpoint) {
                return Err(Error::InvalidData(format!(
                    "Edge {} references nonexistent node {endpoint}",
                    edge.id
                )));
            }
        }
        if edge.distance_m < 0.0 {
            return Err(Error::InvalidData(format!(
                "Edge {} has negative distance {}",
                edge.id, edge.distance_m
            )));
        }
    }
    Ok(())
}
