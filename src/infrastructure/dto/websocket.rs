//! WebSocket wire messages for the connection gateway.
//!
//! Delivery events (`message_received`, `messages_seen`,
//! `conversation_updated`) are serialized straight from
//! `domain::DeliveryEvent`; the DTOs here cover only the gateway's own
//! join/ack/error frames.

use serde::{Deserialize, Serialize};

/// Inbound frames a client may send over the socket
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Bind (or re-bind) this connection to the user's room
    JoinRoom { user_id: String },
}

/// Outbound frames the gateway emits on its own behalf
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GatewayEvent {
    /// Acknowledges a successful join
    RoomJoined { user_id: String },
    /// A frame could not be honored; the connection stays open
    Error { reason: String },
}
