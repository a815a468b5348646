//! HTTP routes.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::websocket::WsState;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<WsState>> {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
}

async fn liveness() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub connections: usize,
}

async fn health(State(state): State<Arc<WsState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        connections: state.connections.count(),
    })
}
