//! Room pusher interface.

use async_trait::async_trait;

use super::event::DeliveryEvent;
use super::message::UserId;

/// Room Pusher trait
///
/// Fans one event out to every live connection in a user's room.
/// Delivery is strictly best-effort: a connection that is gone or congested
/// is skipped without error, because durability was already settled by the
/// message store before any push happens.
#[async_trait]
pub trait RoomPusher: Send + Sync {
    /// Push `event` to every member of `user`'s room.
    ///
    /// Returns the number of connections the event was handed to, which is
    /// zero when the room does not exist. Never fails.
    async fn push_to_room(&self, user: &UserId, event: &DeliveryEvent) -> usize;
}
