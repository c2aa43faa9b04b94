//! UseCase: send a direct message.
//!
//! The one ordering rule of the whole engine lives here: the durable write
//! happens-before any push. When persistence fails the caller gets
//! `PersistenceFailure` and no room is touched; once persistence succeeds,
//! pushes are best-effort and their outcome is not reported.

use std::sync::Arc;

use crate::domain::{DeliveryEvent, Message, MessageBody, MessageStore, RoomPusher, UserId};

use super::error::SendMessageError;

/// Delivery engine entry point for new messages
pub struct SendMessageUseCase {
    /// Message store (single source of truth for message state)
    store: Arc<dyn MessageStore>,
    /// Room pusher (best-effort notification layer)
    pusher: Arc<dyn RoomPusher>,
}

impl SendMessageUseCase {
    pub fn new(store: Arc<dyn MessageStore>, pusher: Arc<dyn RoomPusher>) -> Self {
        Self { store, pusher }
    }

    /// Persist the message, then fan it out.
    ///
    /// Target rooms are {sender, recipient}: the recipient for delivery,
    /// the sender for optimistic multi-device sync. Both rooms also get a
    /// `conversation_updated` hint so list views know to re-query the
    /// aggregator.
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - the persisted record with its assigned id/timestamp
    /// * `Err(SendMessageError)` - validation or persistence failure; no
    ///   push happened
    pub async fn execute(
        &self,
        from: UserId,
        to: UserId,
        body: MessageBody,
    ) -> Result<Message, SendMessageError> {
        // 1. Validate: no self-messages in the delivery path
        if from == to {
            return Err(SendMessageError::InvalidMessage(
                "sender and recipient must differ".to_string(),
            ));
        }

        // 2. Durable write; must complete before any push
        let message = self.store.create(from, to, body).await?;

        // 3. Fan out to both rooms, best-effort
        let received = DeliveryEvent::MessageReceived {
            message: message.clone(),
        };
        for user in [&message.from, &message.to] {
            let delivered = self.pusher.push_to_room(user, &received).await;
            tracing::debug!(
                "Pushed message {} to {} connection(s) in room '{}'",
                message.id,
                delivered,
                user
            );

            let hint = DeliveryEvent::ConversationUpdated {
                user_id: user.clone(),
            };
            self.pusher.push_to_room(user, &hint).await;
        }

        Ok(message)
    }
}
