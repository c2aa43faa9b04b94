//! WebSocket-backed Room Pusher implementation.
//!
//! Resolves the target room through the registry and hands the serialized
//! event to each connection's pusher channel. The WebSocket itself is
//! created and driven by the UI layer (`ui::handler::websocket`); this
//! implementation only ever sees the channels registered there.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{DeliveryEvent, RoomPusher, RoomRegistry, UserId};

/// Room Pusher over the registry's pusher channels
///
/// A send into a closed channel means the connection is gone; the push is
/// dropped silently (logged at debug) since durability already succeeded
/// before any push was attempted.
pub struct WebSocketRoomPusher {
    registry: Arc<dyn RoomRegistry>,
}

impl WebSocketRoomPusher {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl RoomPusher for WebSocketRoomPusher {
    async fn push_to_room(&self, user: &UserId, event: &DeliveryEvent) -> usize {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to serialize delivery event: {}", e);
                return 0;
            }
        };

        let members = self.registry.members_of(user).await;
        let mut delivered = 0;
        for (connection_id, sender) in members {
            if sender.send(payload.clone()).is_ok() {
                delivered += 1;
            } else {
                tracing::debug!(
                    "Dropped push to closed connection {} in room '{}'",
                    connection_id,
                    user
                );
            }
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionId;
    use crate::infrastructure::registry::InMemoryRoomRegistry;
    use tokio::sync::mpsc;

    fn user(raw: &str) -> UserId {
        UserId::new(raw.to_string()).unwrap()
    }

    fn hint_for(raw: &str) -> DeliveryEvent {
        DeliveryEvent::ConversationUpdated {
            user_id: user(raw),
        }
    }

    #[tokio::test]
    async fn test_push_reaches_every_room_member() {
        // given: alice has two live connections
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let pusher = WebSocketRoomPusher::new(registry.clone());
        let alice = user("alice");
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        registry
            .join(alice.clone(), ConnectionId::generate(), tx1)
            .await;
        registry
            .join(alice.clone(), ConnectionId::generate(), tx2)
            .await;

        // when:
        let delivered = pusher.push_to_room(&alice, &hint_for("alice")).await;

        // then: both devices received the same payload
        assert_eq!(delivered, 2);
        let p1 = rx1.recv().await.unwrap();
        let p2 = rx2.recv().await.unwrap();
        assert_eq!(p1, p2);
        assert!(p1.contains("conversation_updated"));
    }

    #[tokio::test]
    async fn test_push_to_absent_room_delivers_nothing() {
        // given:
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let pusher = WebSocketRoomPusher::new(registry);

        // when:
        let delivered = pusher.push_to_room(&user("nobody"), &hint_for("nobody")).await;

        // then:
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn test_push_drops_closed_connection_without_error() {
        // given: one live and one already-closed connection
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let pusher = WebSocketRoomPusher::new(registry.clone());
        let alice = user("alice");
        let (tx_live, mut rx_live) = mpsc::unbounded_channel();
        let (tx_dead, rx_dead) = mpsc::unbounded_channel();
        drop(rx_dead);
        registry
            .join(alice.clone(), ConnectionId::generate(), tx_live)
            .await;
        registry
            .join(alice.clone(), ConnectionId::generate(), tx_dead)
            .await;

        // when:
        let delivered = pusher.push_to_room(&alice, &hint_for("alice")).await;

        // then: the live connection still got its push
        assert_eq!(delivered, 1);
        assert!(rx_live.recv().await.is_some());
    }
}
