//! Data transfer objects for the WebSocket and HTTP surfaces.
//!
//! DTOs carry plain strings; conversion into validated domain value objects
//! happens at the UI boundary, never inside the usecases.

pub mod http;
pub mod websocket;
