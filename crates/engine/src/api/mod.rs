//! API layer - HTTP and WebSocket entry points.

use std::sync::Arc;

use axum::{routing::get, Router};

pub mod connections;
pub mod http;
pub mod websocket;

pub use connections::ConnectionManager;

use websocket::WsState;

/// HTTP routes plus the `/ws` session endpoint, sharing one state.
pub fn router(state: Arc<WsState>) -> Router {
    http::routes()
        .route("/ws", get(websocket::ws_handler))
        .with_state(state)
}
