//! UI layer: HTTP/WebSocket surface of the delivery server.

pub mod handler;
pub mod server;
pub mod signal;
pub mod state;

pub use server::Server;
