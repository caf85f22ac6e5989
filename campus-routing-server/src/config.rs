//! Server configuration, read from a TOML file.

use std::path::PathBuf;

use campus_routing_core::prelude::{
    MAX_SNAP_DISTANCE_M, RoutingConfig, SnapshotConfig,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on, e.g. "0.0.0.0:3000".
    pub listen: String,
    pub snapshot: SnapshotFiles,
    #[serde(default)]
    pub limits: Limits,
}

#[derive(Debug, Deserialize)]
pub struct SnapshotFiles {
    pub nodes: PathBuf,
    pub edges: PathBuf,
    #[serde(default)]
    pub bindings: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Per-request wall-clock budget in seconds.
    pub request_timeout_s: u64,
    /// Route requests processed concurrently before backpressure.
    pub max_in_flight: usize,
    pub snap_radius_m: f64,
    /// Optional cap on total route length in meters.
    pub max_route_distance_m: Option<f64>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            request_timeout_s: 5,
            max_in_flight: 64,
            snap_radius_m: MAX_SNAP_DISTANCE_M,
            max_route_distance_m: None,
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn snapshot_config(&self) -> SnapshotConfig {
        SnapshotConfig {
            nodes_path: self.snapshot.nodes.clone(),
            edges_path: self.snapshot.edges.clone(),
            bindings_path: self.snapshot.bindings.clone(),
        }
    }

    pub fn routing_config(&self) -> RoutingConfig {
        RoutingConfig {
            snap_radius_m: self.limits.snap_radius_m,
            max_route_distance_m: self.limits.max_route_distance_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_config() {
        let config: ServerConfig = toml::from_str(
            r#"
            listen = "127.0.0.1:3000"

            [snapshot]
            nodes = "data/nodes.json"
            edges = "data/edges.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.listen, "127.0.0.1:3000");
        assert_eq!(config.limits.request_timeout_s, 5);
        assert_eq!(config.limits.snap_radius_m, MAX_SNAP_DISTANCE_M);
        assert!(config.snapshot.bindings.is_none());
    }

    #[test]
    fn limits_can_be_overridden() {
        let config: ServerConfig = toml::from_str(
            r#"
            listen = "0.0.0.0:8080"

            [snapshot]
            nodes = "nodes.json"
            edges = "edges.json"
            bindings = "bindings.json"

            [limits]
            request_timeout_s = 2
            max_in_flight = 8
            snap_radius_m = 50.0
            max_route_distance_m = 5000.0
            "#,
        )
        .unwrap();
        assert_eq!(config.limits.max_in_flight, 8);
        let routing = config.routing_config();
        assert_eq!(routing.snap_radius_m, 50.0);
        assert_eq!(routing.max_route_distance_m, Some(5000.0));
    }
}
