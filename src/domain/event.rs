//! Outbound delivery events pushed into rooms.

use serde::Serialize;

use super::message::{Message, UserId};

/// Event pushed to the live connections of a room.
///
/// Pushes are best-effort notifications layered over the durable store: a
/// client that misses one recovers by re-querying history or conversation
/// summaries, never by replay.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeliveryEvent {
    /// A message was persisted; carries the full record.
    /// Sent to both the sender's room (multi-device sync) and the
    /// recipient's room (delivery).
    MessageReceived { message: Message },
    /// The reader marked all messages from the peer as seen.
    /// Sent to the peer's room only.
    MessagesSeen { reader_id: UserId, peer_id: UserId },
    /// Lightweight hint that the user's conversation list changed and
    /// should be re-queried; avoids embedding the message payload twice.
    ConversationUpdated { user_id: UserId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::{MessageBody, MessageId, Timestamp};

    #[test]
    fn test_message_received_wire_shape() {
        // given:
        let event = DeliveryEvent::MessageReceived {
            message: Message {
                id: MessageId::generate(),
                from: UserId::new("alice".to_string()).unwrap(),
                to: UserId::new("bob".to_string()).unwrap(),
                body: MessageBody::text("hi".to_string()).unwrap(),
                seen: false,
                created_at: Timestamp::new(42),
            },
        };

        // when:
        let value = serde_json::to_value(&event).unwrap();

        // then:
        assert_eq!(value["type"], "message_received");
        assert_eq!(value["message"]["text"], "hi");
    }

    #[test]
    fn test_messages_seen_wire_shape() {
        // given:
        let event = DeliveryEvent::MessagesSeen {
            reader_id: UserId::new("bob".to_string()).unwrap(),
            peer_id: UserId::new("alice".to_string()).unwrap(),
        };

        // when:
        let value = serde_json::to_value(&event).unwrap();

        // then:
        assert_eq!(value["type"], "messages_seen");
        assert_eq!(value["reader_id"], "bob");
        assert_eq!(value["peer_id"], "alice");
    }

    #[test]
    fn test_conversation_updated_wire_shape() {
        // given:
        let event = DeliveryEvent::ConversationUpdated {
            user_id: UserId::new("alice".to_string()).unwrap(),
        };

        // when:
        let value = serde_json::to_value(&event).unwrap();

        // then:
        assert_eq!(value["type"], "conversation_updated");
        assert_eq!(value["user_id"], "alice");
    }
}
