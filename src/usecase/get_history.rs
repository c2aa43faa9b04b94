//! UseCase: fetch the full history between two users.

use std::sync::Arc;

use crate::domain::{Message, MessageStore, UserId};

use super::error::QueryError;

/// Read path for chat history; the reconciliation target for clients that
/// missed pushes
pub struct GetHistoryUseCase {
    store: Arc<dyn MessageStore>,
}

impl GetHistoryUseCase {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Both directions between the two users, ascending by creation time
    pub async fn execute(
        &self,
        user_a: UserId,
        user_b: UserId,
    ) -> Result<Vec<Message>, QueryError> {
        let messages = self.store.history(&user_a, &user_b).await?;
        Ok(messages)
    }
}
