//! HTTP and WebSocket handlers.

pub mod http;
pub mod websocket;

pub use http::{get_conversations, get_history, health_check, mark_seen, send_message};
pub use websocket::websocket_handler;
