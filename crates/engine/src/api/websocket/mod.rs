//! WebSocket handling for game client sessions.
//!
//! The upstream session layer authenticates the client and passes the
//! account and realm on the upgrade request; from then on every message on
//! the socket acts for that account.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;
use uuid::Uuid;

use charserver_domain::{AccountId, RealmId};
use charserver_shared::{ClientMessage, ServerMessage};

use super::connections::ConnectionManager;
use crate::app::App;
use crate::infrastructure::ports::SessionContext;

mod ws_character;


/// Buffer size for per-connection message channel.
const CONNECTION_CHANNEL_BUFFER: usize = 256;

/// Combined state for WebSocket handlers.
pub struct WsState {
    pub app: Arc<App>,
    pub connections: Arc<ConnectionManager>,
}

/// Identity attached by the session layer to the upgrade request.
#[derive(Debug, Deserialize)]
pub struct SessionParams {
    pub account_id: u32,
    pub realm_id: u32,
}

impl From<SessionParams> for SessionContext {
    fn from(params: SessionParams) -> Self {
        SessionContext::new(
            AccountId::new(params.account_id),
            RealmId::new(params.realm_id),
        )
    }
}

/// What the connection loop does after a message was handled.
#[derive(Debug)]
pub(crate) enum Outcome {
    Reply(ServerMessage),
    /// The client broke the protocol; close without replying.
    Disconnect,
}

/// WebSocket upgrade handler - entry point for new connections.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<SessionParams>,
    State(state): State<Arc<WsState>>,
) -> Response {
    let session = SessionContext::from(params);
    ws.on_upgrade(move |socket| handle_socket(socket, state, session))
}

/// Handle an individual WebSocket connection.
async fn handle_socket(socket: WebSocket, state: Arc<WsState>, session: SessionContext) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let connection_id = Uuid::new_v4();

    // Create a bounded channel for sending messages to this client
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(CONNECTION_CHANNEL_BUFFER);

    state.connections.register(connection_id, session);

    tracing::info!(
        connection_id = %connection_id,
        account_id = %session.account_id,
        realm_id = %session.realm_id,
        account_sessions = state.connections.count_for_account(session.account_id),
        "WebSocket connection established"
    );

    // Forward queued messages to the socket; close it once the queue is dropped.
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Ok(json) = serde_json::to_string(&msg) {
                if ws_sender.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
        }
        let _ = ws_sender.close().await;
    });

    // Handle incoming messages
    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientMessage>(text.as_str()) {
                Ok(msg) => match handle_message(msg, &state, connection_id, session).await {
                    Outcome::Reply(response) => {
                        if tx.try_send(response).is_err() {
                            tracing::warn!(
                                connection_id = %connection_id,
                                "Failed to send response, channel full or closed"
                            );
                        }
                    }
                    Outcome::Disconnect => {
                        tracing::warn!(
                            connection_id = %connection_id,
                            account_id = %session.account_id,
                            "Protocol violation, closing connection"
                        );
                        break;
                    }
                },
                Err(e) => {
                    tracing::warn!(connection_id = %connection_id, error = %e, "Failed to parse message");
                    let _ = tx.try_send(error_response(
                        PARSE_ERROR,
                        &format!("Invalid message format: {}", e),
                    ));
                }
            },
            Ok(Message::Ping(_)) => {
                let _ = tx.try_send(ServerMessage::Pong);
            }
            Ok(Message::Close(_)) => {
                tracing::info!(connection_id = %connection_id, "WebSocket closed by client");
                break;
            }
            Err(e) => {
                tracing::error!(connection_id = %connection_id, error = %e, "WebSocket error");
                break;
            }
            _ => {}
        }
    }

    // Clean up
    state.connections.unregister(connection_id);
    drop(tx);
    let _ = send_task.await;

    tracing::info!(connection_id = %connection_id, "WebSocket connection terminated");
}

/// Dispatch a parsed client message to the appropriate handler.
async fn handle_message(
    msg: ClientMessage,
    state: &WsState,
    connection_id: Uuid,
    session: SessionContext,
) -> Outcome {
    match msg {
        ClientMessage::Heartbeat => Outcome::Reply(ServerMessage::Pong),

        ClientMessage::EnumCharacters => {
            Outcome::Reply(ws_character::handle_enum_characters(state, session).await)
        }

        ClientMessage::CreateCharacter {
            name,
            race_id,
            class_id,
            sex_id,
            skin_id,
            face_id,
            hair_style_id,
            hair_color_id,
            facial_hair_style_id,
            template_set_id,
        } => {
            let request = ws_character::CreateRequest {
                name,
                race_id,
                class_id,
                sex_id,
                skin_id,
                face_id,
                hair_style_id,
                hair_color_id,
                facial_hair_style_id,
                template_set_id,
            };
            Outcome::Reply(ws_character::handle_create_character(state, session, request).await)
        }

        ClientMessage::CharDelete { guid } => {
            ws_character::handle_char_delete(state, session, guid).await
        }

        ClientMessage::Unknown => {
            tracing::debug!(connection_id = %connection_id, "Unsupported message type");
            Outcome::Reply(error_response(
                UNSUPPORTED_MESSAGE,
                "Message type is not supported",
            ))
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

const PARSE_ERROR: &str = "PARSE_ERROR";
const UNSUPPORTED_MESSAGE: &str = "UNSUPPORTED_MESSAGE";

fn error_response(code: &str, message: &str) -> ServerMessage {
    ServerMessage::Error {
        code: code.to_string(),
        message: message.to_string(),
    }
}
