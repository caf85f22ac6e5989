use criterion::{Criterion, black_box, criterion_group, criterion_main};

use campus_routing_core::model::components::{NodeCategory, PathType};
use campus_routing_core::prelude::*;

/// Synthetic grid of outdoor nodes with edges between grid neighbors,
/// anchored near the real campus coordinates.
fn grid_snapshot(side: usize) -> CampusSnapshot {
    let spacing = 0.0004; // ~44 m between neighbors
    let mut nodes = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let id = (row * side + col) as NodeId + 1;
            nodes.push(PathNode {
                id,
                name: format!("grid {row}/{col}"),
                lat: 7.2500 + row as f64 * spacing,
                lng: 80.5900 + col as f64 * spacing,
                category: NodeCategory::Intersection,
                indoor: false,
                building: None,
                floor: None,
            });
        }
    }

    let mut edges = Vec::new();
    let mut edge_id = 0;
    for row in 0..side {
        for col in 0..side {
            let id = (row * side + col) as NodeId + 1;
            for (nrow, ncol) in [(row + 1, col), (row, col + 1)] {
                if nrow < side && ncol < side {
                    let nid = (nrow * side + ncol) as NodeId + 1;
                    let a = &nodes[(id - 1) as usize];
                    let b = &nodes[(nid - 1) as usize];
                    let (distance_m, walking_time_s) = PathEdge::derive_metrics(a, b);
                    edge_id += 1;
                    edges.push(PathEdge {
                        id: edge_id,
                        node_a: id,
                        node_b: nid,
                        distance_m,
                        walking_time_s,
                        bidirectional: true,
                        path_type: PathType::Sidewalk,
                        indoor: false,
                    });
                }
            }
        }
    }

    CampusSnapshot::new(nodes, edges, vec![])
}

fn bench_route_calculation(c: &mut Criterion) {
    let snapshot = grid_snapshot(30);
    let config = RoutingConfig::default();
    // Opposite corners of the grid.
    let request = RouteRequest {
        start_lat: 7.2500,
        start_lng: 80.5900,
        end_lat: 7.2500 + 29.0 * 0.0004,
        end_lng: 80.5900 + 29.0 * 0.0004,
    };

    c.bench_function("calculate_route grid 30x30", |b| {
        b.iter(|| calculate_route(black_box(&snapshot), &config, &request).unwrap());
    });

    c.bench_function("graph rebuild grid 30x30", |b| {
        b.iter(|| CampusGraph::from_edges(black_box(&snapshot.edges)));
    });
}

criterion_group!(benches, bench_route_calculation);
criterion_main!(benches);
