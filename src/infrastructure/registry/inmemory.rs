//! In-memory Room Registry implementation.
//!
//! One `HashMap` of rooms behind a single `tokio::sync::Mutex`; every
//! operation takes the lock exactly once, so a reader never observes a
//! half-applied join or leave.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, PusherChannel, RoomRegistry, UserId};

/// In-memory Room Registry
///
/// Membership is intentionally volatile: a restart drops every room, and
/// reconnecting clients rebuild them via join.
pub struct InMemoryRoomRegistry {
    rooms: Mutex<HashMap<UserId, HashMap<ConnectionId, PusherChannel>>>,
}

impl InMemoryRoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn join(&self, user: UserId, connection_id: ConnectionId, sender: PusherChannel) {
        let mut rooms = self.rooms.lock().await;
        rooms
            .entry(user.clone())
            .or_default()
            .insert(connection_id, sender);
        tracing::debug!("Connection {} joined room '{}'", connection_id, user);
    }

    async fn leave(&self, user: &UserId, connection_id: &ConnectionId) {
        let mut rooms = self.rooms.lock().await;
        if let Some(room) = rooms.get_mut(user) {
            room.remove(connection_id);
            if room.is_empty() {
                // rooms are not retained empty
                rooms.remove(user);
                tracing::debug!("Room '{}' emptied and removed", user);
            }
        }
        tracing::debug!("Connection {} left room '{}'", connection_id, user);
    }

    async fn members_of(&self, user: &UserId) -> Vec<(ConnectionId, PusherChannel)> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(user)
            .map(|room| {
                room.iter()
                    .map(|(id, sender)| (*id, sender.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    async fn room_count(&self) -> usize {
        let rooms = self.rooms.lock().await;
        rooms.len()
    }
}
