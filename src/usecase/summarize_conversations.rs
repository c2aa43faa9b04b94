//! UseCase: per-peer conversation summaries.

use std::sync::Arc;

use crate::domain::{ConversationSummary, MessageStore, UserId};

use super::error::QueryError;

/// Conversation aggregator: reduces the message store into one
/// "last message + unread count" row per peer.
///
/// Recomputed on demand straight from the store, so a summary taken right
/// after a successful send or seen-mark reflects that mutation
/// (read-after-write within the process). No cache.
pub struct SummarizeConversationsUseCase {
    store: Arc<dyn MessageStore>,
}

impl SummarizeConversationsUseCase {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// One summary per distinct peer, most recent conversation first
    pub async fn execute(&self, user: UserId) -> Result<Vec<ConversationSummary>, QueryError> {
        let mut rows = self.store.recent_per_peer(&user).await?;
        rows.sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at));

        Ok(rows
            .into_iter()
            .map(|row| ConversationSummary {
                peer: row.peer,
                last_message: row.last_message,
                unseen_count: row.unseen_count,
            })
            .collect())
    }
}
