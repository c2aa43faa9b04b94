//! Room registry interface.
//!
//! A room is the set of live connections of one user. Rooms exist only in
//! memory and only while at least one connection is registered; a restart
//! loses them, and reconnecting clients rebuild membership via join.

use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

use super::message::UserId;

/// Channel used to hand outbound payloads to a connection's pusher task
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Identity of one live transport connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Room Registry trait
///
/// The single source of truth for "who is currently reachable". All
/// operations are in-memory and internally synchronized; callers never
/// layer their own locking on top.
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// Add a connection to the user's room, creating the room if absent.
    /// Idempotent: re-joining with the same connection id replaces the
    /// previous entry rather than duplicating it.
    async fn join(&self, user: UserId, connection_id: ConnectionId, sender: PusherChannel);

    /// Remove a connection from the user's room; deletes the room once
    /// empty. Removing an absent connection is a no-op, since duplicate
    /// disconnect notifications are an expected lifecycle race.
    async fn leave(&self, user: &UserId, connection_id: &ConnectionId);

    /// Snapshot of the user's current room membership. The returned set is
    /// detached from the registry; concurrent joins and leaves do not
    /// affect it.
    async fn members_of(&self, user: &UserId) -> Vec<(ConnectionId, PusherChannel)>;

    /// Number of currently non-empty rooms
    async fn room_count(&self) -> usize;
}
