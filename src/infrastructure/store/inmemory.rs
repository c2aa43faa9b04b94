//! In-memory Message Store implementation.
//!
//! The domain's `MessageStore` trait implemented over a `Vec` behind a
//! `tokio::sync::Mutex`. Messages are appended in persistence-completion
//! order, so insertion order doubles as the tie-breaker for equal
//! timestamps (which the monotonic timestamp assignment already prevents
//! within one store instance).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::common::time::Clock;
use crate::domain::{Message, MessageBody, MessageId, MessageStore, PeerActivity, StoreError, Timestamp, UserId};

struct StoreInner {
    messages: Vec<Message>,
    last_timestamp: i64,
}

/// In-memory Message Store
///
/// The clock is injected so tests can pin time; assigned timestamps are
/// strictly increasing even when the clock stalls.
pub struct InMemoryMessageStore {
    inner: Mutex<StoreInner>,
    clock: Arc<dyn Clock>,
}

impl InMemoryMessageStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                messages: Vec::new(),
                last_timestamp: 0,
            }),
            clock,
        }
    }

    /// Total number of stored messages
    pub async fn len(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.messages.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn create(
        &self,
        from: UserId,
        to: UserId,
        body: MessageBody,
    ) -> Result<Message, StoreError> {
        let mut inner = self.inner.lock().await;

        let assigned = self.clock.now_millis().max(inner.last_timestamp + 1);
        inner.last_timestamp = assigned;

        let message = Message {
            id: MessageId::generate(),
            from,
            to,
            body,
            seen: false,
            created_at: Timestamp::new(assigned),
        };
        inner.messages.push(message.clone());

        tracing::debug!(
            "Persisted message {} from '{}' to '{}'",
            message.id,
            message.from,
            message.to
        );
        Ok(message)
    }

    async fn mark_seen(&self, reader: &UserId, peer: &UserId) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().await;

        let mut updated = 0u64;
        for message in inner.messages.iter_mut() {
            if &message.from == peer && &message.to == reader && !message.seen {
                message.seen = true;
                updated += 1;
            }
        }

        tracing::debug!(
            "Marked {} message(s) from '{}' to '{}' as seen",
            updated,
            peer,
            reader
        );
        Ok(updated)
    }

    async fn history(&self, user_a: &UserId, user_b: &UserId) -> Result<Vec<Message>, StoreError> {
        let inner = self.inner.lock().await;

        let messages = inner
            .messages
            .iter()
            .filter(|m| {
                (&m.from == user_a && &m.to == user_b) || (&m.from == user_b && &m.to == user_a)
            })
            .cloned()
            .collect();
        Ok(messages)
    }

    async fn recent_per_peer(&self, user: &UserId) -> Result<Vec<PeerActivity>, StoreError> {
        let inner = self.inner.lock().await;

        let mut by_peer: HashMap<UserId, PeerActivity> = HashMap::new();
        for message in inner.messages.iter() {
            let peer = if &message.from == user {
                &message.to
            } else if &message.to == user {
                &message.from
            } else {
                continue;
            };

            let unseen = u64::from(&message.to == user && !message.seen);
            match by_peer.get_mut(peer) {
                Some(activity) => {
                    // ascending scan: the latest occurrence wins
                    activity.last_message = message.clone();
                    activity.unseen_count += unseen;
                }
                None => {
                    by_peer.insert(
                        peer.clone(),
                        PeerActivity {
                            peer: peer.clone(),
                            last_message: message.clone(),
                            unseen_count: unseen,
                        },
                    );
                }
            }
        }

        Ok(by_peer.into_values().collect())
    }
}
