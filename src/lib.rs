//! Direct-message delivery core.
//!
//! This library implements the real-time fan-out engine of a messaging
//! service: per-user rooms of live WebSocket connections, a delivery engine
//! that pushes persisted messages and seen-state changes into those rooms,
//! and a conversation aggregator over the durable message store.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// shared library
pub mod common;
