//! HTTP surface of the routing service.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use campus_routing_core::prelude::{
    CampusSnapshot, RouteRequest, RouteSummary, RoutingConfig, calculate_route,
};

/// Read-only state shared by all requests. The routing graph itself is
/// rebuilt from the snapshot per request, so no locking is needed.
pub struct AppState {
    pub snapshot: CampusSnapshot,
    pub routing: RoutingConfig,
}

#[derive(Serialize)]
struct RouteSuccess {
    success: bool,
    #[serde(flatten)]
    summary: RouteSummary,
}

#[derive(Serialize)]
struct RouteFailure {
    success: bool,
    message: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/route", post(route_handler))
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
}

/// `POST /route` with `{start_lat, start_lng, end_lat, end_lng}`.
///
/// Routing outcomes ("no nearby node", "no path") are answers, not faults:
/// they come back as HTTP 200 with `success: false`, matching what the web
/// front end expects. Non-numeric payloads never reach the core; the JSON
/// extractor rejects them first.
async fn route_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> Response {
    match calculate_route(&state.snapshot, &state.routing, &request) {
        Ok(summary) => Json(RouteSuccess {
            success: true,
            summary,
        })
        .into_response(),
        Err(err) if err.is_routing_outcome() => {
            tracing::debug!("Route request not satisfiable: {err}");
            Json(RouteFailure {
                success: false,
                message: err.to_string(),
            })
            .into_response()
        }
        Err(err) => {
            tracing::error!("Route calculation failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RouteFailure {
                    success: false,
                    message: "Internal error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use campus_routing_core::model::components::{NodeCategory, PathType};
    use campus_routing_core::prelude::*;
    use tower::util::ServiceExt;

    use super::*;

    fn test_state() -> Arc<AppState> {
        let nodes = vec![
            PathNode {
                id: 1,
                name: "Main gate".to_string(),
                lat: 7.2544,
                lng: 80.5906,
                category: NodeCategory::Intersection,
                indoor: false,
                building: None,
                floor: None,
            },
            PathNode {
                id: 2,
                name: "Library".to_string(),
                lat: 7.2550,
                lng: 80.5910,
                category: NodeCategory::Entrance,
                indoor: false,
                building: Some("LIB".to_string()),
                floor: Some(0),
            },
        ];
        let (distance_m, walking_time_s) = PathEdge::derive_metrics(&nodes[0], &nodes[1]);
        let edges = vec![PathEdge {
            id: 1,
            node_a: 1,
            node_b: 2,
            distance_m,
            walking_time_s,
            bidirectional: true,
            path_type: PathType::Sidewalk,
            indoor: false,
        }];
        Arc::new(AppState {
            snapshot: CampusSnapshot::new(nodes, edges, vec![]),
            routing: RoutingConfig::default(),
        })
    }

    fn post_route(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/route")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn successful_route_response_shape() {
        let app = router(test_state());
        let response = app
            .oneshot(post_route(
                r#"{"start_lat": 7.2544, "start_lng": 80.5906,
                    "end_lat": 7.2550, "end_lng": 80.5910}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["steps"], 1);
        assert_eq!(json["path"].as_array().unwrap().len(), 2);
        assert_eq!(json["start_node"]["id"], 1);
        assert_eq!(json["start_node"]["name"], "Main gate");
        assert_eq!(json["end_node"]["id"], 2);
        assert!(json["distance"].as_f64().unwrap() > 0.0);
        assert!(json["time"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn unroutable_point_is_a_success_false_answer() {
        let app = router(test_state());
        let response = app
            .oneshot(post_route(
                r#"{"start_lat": 8.0, "start_lng": 81.0,
                    "end_lat": 7.2550, "end_lng": 80.5910}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(
            json["message"].as_str().unwrap().contains("start"),
            "{json}"
        );
    }

    #[tokio::test]
    async fn malformed_payload_is_rejected_before_the_core() {
        let app = router(test_state());
        let response = app
            .oneshot(post_route(
                r#"{"start_lat": "not a number", "start_lng": 80.5906,
                    "end_lat": 7.2550, "end_lng": 80.5910}"#,
            ))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
