//! Room pusher implementations.

pub mod websocket;

pub use websocket::WebSocketRoomPusher;
