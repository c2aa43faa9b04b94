//! Message entities and their value objects.

use serde::Serialize;
use uuid::Uuid;

/// Maximum length of a user id in characters
pub const MAX_USER_ID_LEN: usize = 64;

/// Maximum length of a text message body in characters
pub const MAX_TEXT_LEN: usize = 4096;

/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("user id must be non-empty, contain no whitespace and be at most {MAX_USER_ID_LEN} characters")]
    InvalidUserId,
    #[error("text body must be non-empty and at most {MAX_TEXT_LEN} characters")]
    InvalidTextBody,
    #[error("media reference must be a non-empty URL")]
    InvalidMediaRef,
    #[error("unknown message kind: {0}")]
    UnknownKind(String),
}

/// Opaque user identity.
///
/// Issued by the (out-of-scope) account system; this core only validates the
/// shape so registry keys and wire events stay well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.is_empty()
            || value.chars().count() > MAX_USER_ID_LEN
            || value.chars().any(char::is_whitespace)
        {
            return Err(DomainError::InvalidUserId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Server-assigned message identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Unix timestamp in milliseconds, server-assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Message payload, carrying exactly the field its kind requires.
///
/// A text message with a missing body or a media message without a URL is
/// unrepresentable; the constructors validate the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageBody {
    Text { text: String },
    Media { media_url: String },
}

impl MessageBody {
    /// Build a text body; rejects empty or oversized content
    pub fn text(text: String) -> Result<Self, DomainError> {
        if text.is_empty() || text.chars().count() > MAX_TEXT_LEN {
            return Err(DomainError::InvalidTextBody);
        }
        Ok(Self::Text { text })
    }

    /// Build a media body; rejects an empty reference
    pub fn media(media_url: String) -> Result<Self, DomainError> {
        if media_url.trim().is_empty() {
            return Err(DomainError::InvalidMediaRef);
        }
        Ok(Self::Media { media_url })
    }
}

/// A persisted direct message.
///
/// Immutable once created except for the `seen` flag, which only the message
/// store flips on behalf of the recipient's read action.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: MessageId,
    pub from: UserId,
    pub to: UserId,
    #[serde(flatten)]
    pub body: MessageBody,
    pub seen: bool,
    pub created_at: Timestamp,
}

/// Per-peer conversation summary, derived from the message store on demand
#[derive(Debug, Clone, Serialize)]
pub struct ConversationSummary {
    pub peer: UserId,
    pub last_message: Message,
    pub unseen_count: u64,
}
