//! Message store interface.
//!
//! The store is the single source of truth for message state and the only
//! component allowed to mutate it. The delivery engine depends on this trait;
//! the in-memory implementation lives in the infrastructure layer, and a
//! document database binding would implement the same interface.

use async_trait::async_trait;

use super::message::{Message, MessageBody, UserId};

/// Durable persistence failed; the triggering operation must surface this to
/// its caller and must not push anything.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("persistence failure: {0}")]
    PersistenceFailure(String),
}

/// Per-peer activity row, the primitive the conversation aggregator
/// composes over
#[derive(Debug, Clone)]
pub struct PeerActivity {
    pub peer: UserId,
    pub last_message: Message,
    pub unseen_count: u64,
}

/// Message Store trait
///
/// The usecase layer depends on this trait and never on a concrete store.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persist a new message, assigning its id and timestamp.
    /// Timestamps are monotonic per store instance.
    async fn create(
        &self,
        from: UserId,
        to: UserId,
        body: MessageBody,
    ) -> Result<Message, StoreError>;

    /// Mark every message addressed to `reader` from `peer` as seen.
    /// Idempotent; returns the number of newly-updated records.
    async fn mark_seen(&self, reader: &UserId, peer: &UserId) -> Result<u64, StoreError>;

    /// Full two-way history between two users, ascending by creation time
    /// (insertion order breaks ties).
    async fn history(&self, user_a: &UserId, user_b: &UserId) -> Result<Vec<Message>, StoreError>;

    /// One row per distinct peer of `user`: the most recent message of the
    /// pair plus the count of unseen messages addressed to `user`.
    /// Ordering is unspecified; callers sort as they need.
    async fn recent_per_peer(&self, user: &UserId) -> Result<Vec<PeerActivity>, StoreError>;
}
