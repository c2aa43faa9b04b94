//! WebSocket connection gateway.
//!
//! Connection lifecycle: `Connected-Unbound` until an explicit `join_room`
//! frame binds the socket to a user's room, then `Bound` until the socket
//! closes. Leaving the room is mandatory on close and runs on every exit
//! path of the handler, including error-triggered ones.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::domain::{ConnectionId, PusherChannel, UserId};
use crate::infrastructure::dto::websocket::{ClientEvent, GatewayEvent};

use super::super::state::AppState;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the connection's pusher channel into the
/// WebSocket sink. Everything pushed into this connection's room lands
/// here; when the sink fails the task ends and the handler tears down.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, WsMessage>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if sender.send(WsMessage::Text(payload.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    tracing::info!("Connection {} established (unbound)", connection_id);

    let (tx, rx) = mpsc::unbounded_channel();
    let (sender, mut receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender);

    // user this connection is currently bound to, if any
    let mut bound: Option<UserId> = None;

    loop {
        tokio::select! {
            // sink is gone; no point reading further frames
            _ = &mut send_task => break,
            frame = receiver.next() => {
                let message = match frame {
                    Some(Ok(message)) => message,
                    Some(Err(e)) => {
                        tracing::warn!("Connection {} errored: {}", connection_id, e);
                        break;
                    }
                    None => break,
                };

                match message {
                    WsMessage::Text(text) => {
                        handle_frame(&state, connection_id, &tx, &mut bound, &text).await;
                    }
                    WsMessage::Close(_) => {
                        tracing::info!("Connection {} requested close", connection_id);
                        break;
                    }
                    // ping/pong handled by the protocol layer
                    _ => {}
                }
            }
        }
    }

    send_task.abort();
    release_binding(&state, connection_id, bound).await;
}

/// Bound -> Closed: leaving the room must happen no matter why the handler
/// exited. An unbound connection has nothing to release.
async fn release_binding(
    state: &Arc<AppState>,
    connection_id: ConnectionId,
    bound: Option<UserId>,
) {
    if let Some(user) = bound {
        state.registry.leave(&user, &connection_id).await;
        tracing::info!("Connection {} closed, left room '{}'", connection_id, user);
    } else {
        tracing::info!("Connection {} closed (unbound)", connection_id);
    }
}

async fn handle_frame(
    state: &Arc<AppState>,
    connection_id: ConnectionId,
    tx: &PusherChannel,
    bound: &mut Option<UserId>,
    text: &str,
) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Connection {} sent unrecognized frame: {}", connection_id, e);
            send_gateway_event(
                tx,
                &GatewayEvent::Error {
                    reason: "unrecognized frame".to_string(),
                },
            );
            return;
        }
    };

    match event {
        ClientEvent::JoinRoom { user_id } => {
            let user = match UserId::try_from(user_id) {
                Ok(user) => user,
                Err(e) => {
                    tracing::warn!(
                        "Connection {} sent invalid join: {}",
                        connection_id,
                        e
                    );
                    send_gateway_event(
                        tx,
                        &GatewayEvent::Error {
                            reason: e.to_string(),
                        },
                    );
                    return;
                }
            };

            // re-binding to a different user leaves the old room first;
            // re-joining the same room is idempotent in the registry
            if let Some(previous) = bound.take()
                && previous != user
            {
                state.registry.leave(&previous, &connection_id).await;
                tracing::info!(
                    "Connection {} re-bound from room '{}' to '{}'",
                    connection_id,
                    previous,
                    user
                );
            }

            state
                .registry
                .join(user.clone(), connection_id, tx.clone())
                .await;
            send_gateway_event(
                tx,
                &GatewayEvent::RoomJoined {
                    user_id: user.as_str().to_string(),
                },
            );
            tracing::info!("Connection {} bound to room '{}'", connection_id, user);
            *bound = Some(user);
        }
    }
}

/// Enqueue a gateway frame on the connection's own pusher channel. A send
/// error means the connection is tearing down; nothing to do about it here.
fn send_gateway_event(tx: &PusherChannel, event: &GatewayEvent) {
    match serde_json::to_string(event) {
        Ok(payload) => {
            let _ = tx.send(payload);
        }
        Err(e) => tracing::error!("Failed to serialize gateway event: {}", e),
    }
}
