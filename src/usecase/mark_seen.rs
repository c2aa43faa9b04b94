//! UseCase: mark a conversation as seen.

use std::sync::Arc;

use crate::domain::{DeliveryEvent, MessageStore, RoomPusher, UserId};

use super::error::MarkSeenError;

/// Delivery engine entry point for seen-state changes
pub struct MarkSeenUseCase {
    /// Message store (single source of truth for message state)
    store: Arc<dyn MessageStore>,
    /// Room pusher (best-effort notification layer)
    pusher: Arc<dyn RoomPusher>,
}

impl MarkSeenUseCase {
    pub fn new(store: Arc<dyn MessageStore>, pusher: Arc<dyn RoomPusher>) -> Self {
        Self { store, pusher }
    }

    /// Mark all messages from `peer` addressed to `reader` as seen, then
    /// notify the peer's room only: the original sender learns their
    /// messages were read, the reader is not echoed their own action.
    ///
    /// Idempotent end to end; a repeated call updates zero records and is
    /// not an error.
    pub async fn execute(&self, reader: UserId, peer: UserId) -> Result<u64, MarkSeenError> {
        let updated = self.store.mark_seen(&reader, &peer).await?;

        let event = DeliveryEvent::MessagesSeen {
            reader_id: reader.clone(),
            peer_id: peer.clone(),
        };
        let delivered = self.pusher.push_to_room(&peer, &event).await;
        tracing::debug!(
            "Seen-state change by '{}' pushed to {} connection(s) in room '{}'",
            reader,
            delivered,
            peer
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::time::SystemClock;
    use crate::domain::{ConnectionId, MessageBody, RoomRegistry};
    use crate::infrastructure::{
        pusher::WebSocketRoomPusher, registry::InMemoryRoomRegistry, store::InMemoryMessageStore,
    };
    use tokio::sync::mpsc;

    fn user(raw: &str) -> UserId {
        UserId::new(raw.to_string()).unwrap()
    }

    fn text(raw: &str) -> MessageBody {
        MessageBody::text(raw.to_string()).unwrap()
    }

    fn create_test_engine() -> (
        Arc<InMemoryMessageStore>,
        Arc<InMemoryRoomRegistry>,
        MarkSeenUseCase,
    ) {
        let store = Arc::new(InMemoryMessageStore::new(Arc::new(SystemClock)));
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let pusher = Arc::new(WebSocketRoomPusher::new(registry.clone()));
        let usecase = MarkSeenUseCase::new(store.clone(), pusher);
        (store, registry, usecase)
    }

    #[tokio::test]
    async fn test_mark_seen_notifies_peer_room_only() {
        // given: alice sent bob a message; both are connected
        let (store, registry, usecase) = create_test_engine();
        let alice = user("alice");
        let bob = user("bob");
        store
            .create(alice.clone(), bob.clone(), text("hi"))
            .await
            .unwrap();
        let (tx_alice, mut rx_alice) = mpsc::unbounded_channel();
        let (tx_bob, mut rx_bob) = mpsc::unbounded_channel();
        registry
            .join(alice.clone(), ConnectionId::generate(), tx_alice)
            .await;
        registry
            .join(bob.clone(), ConnectionId::generate(), tx_bob)
            .await;

        // when: bob reads the conversation
        let updated = usecase.execute(bob.clone(), alice.clone()).await.unwrap();

        // then: alice is notified, bob is not echoed
        assert_eq!(updated, 1);
        let payload = rx_alice.recv().await.unwrap();
        assert!(payload.contains("messages_seen"));
        assert!(payload.contains(r#""reader_id":"bob""#));
        assert!(rx_bob.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_mark_seen_twice_reports_zero_new_updates() {
        // given:
        let (store, _registry, usecase) = create_test_engine();
        let alice = user("alice");
        let bob = user("bob");
        store
            .create(alice.clone(), bob.clone(), text("hi"))
            .await
            .unwrap();

        // when:
        let first = usecase.execute(bob.clone(), alice.clone()).await.unwrap();
        let second = usecase.execute(bob, alice).await.unwrap();

        // then:
        assert_eq!(first, 1);
        assert_eq!(second, 0);
    }

    #[tokio::test]
    async fn test_mark_seen_with_offline_peer_still_persists() {
        // given: nobody connected
        let (store, _registry, usecase) = create_test_engine();
        let alice = user("alice");
        let bob = user("bob");
        store
            .create(alice.clone(), bob.clone(), text("hi"))
            .await
            .unwrap();

        // when:
        let updated = usecase.execute(bob.clone(), alice.clone()).await.unwrap();

        // then: the durable state changed even though no push landed
        assert_eq!(updated, 1);
        let history = store.history(&alice, &bob).await.unwrap();
        assert!(history[0].seen);
    }
}
