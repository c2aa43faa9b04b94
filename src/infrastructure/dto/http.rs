//! HTTP request/response bodies and their conversion into domain types.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, MessageBody, UserId};

/// Body of `POST /api/messages`
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub from: String,
    pub to: String,
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
}

impl SendMessageRequest {
    /// Convert into validated domain values.
    ///
    /// An unknown kind or a payload that does not match the kind is an
    /// `InvalidMessage`-class error and is rejected before any persistence
    /// attempt.
    pub fn into_domain(self) -> Result<(UserId, UserId, MessageBody), DomainError> {
        let from = UserId::new(self.from)?;
        let to = UserId::new(self.to)?;
        let body = match self.kind.as_str() {
            "text" => MessageBody::text(self.text.ok_or(DomainError::InvalidTextBody)?)?,
            "media" => MessageBody::media(self.media_url.ok_or(DomainError::InvalidMediaRef)?)?,
            other => return Err(DomainError::UnknownKind(other.to_string())),
        };
        Ok((from, to, body))
    }
}

/// Body of `POST /api/messages/seen`
#[derive(Debug, Clone, Deserialize)]
pub struct MarkSeenRequest {
    pub reader_id: String,
    pub peer_id: String,
}

/// Response of `POST /api/messages/seen`
#[derive(Debug, Clone, Serialize)]
pub struct MarkSeenResponse {
    /// Number of newly-updated records; zero on a repeated call
    pub updated: u64,
}

/// Query of `GET /api/messages/history`
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    pub user_a: String,
    pub user_b: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_converts_to_domain() {
        // given:
        let request = SendMessageRequest {
            from: "alice".to_string(),
            to: "bob".to_string(),
            kind: "text".to_string(),
            text: Some("hi".to_string()),
            media_url: None,
        };

        // when:
        let (from, to, body) = request.into_domain().unwrap();

        // then:
        assert_eq!(from.as_str(), "alice");
        assert_eq!(to.as_str(), "bob");
        assert_eq!(body, MessageBody::text("hi".to_string()).unwrap());
    }

    #[test]
    fn test_media_request_converts_to_domain() {
        // given:
        let request = SendMessageRequest {
            from: "alice".to_string(),
            to: "bob".to_string(),
            kind: "media".to_string(),
            text: None,
            media_url: Some("https://cdn.example/img.png".to_string()),
        };

        // when:
        let (_, _, body) = request.into_domain().unwrap();

        // then:
        assert_eq!(
            body,
            MessageBody::media("https://cdn.example/img.png".to_string()).unwrap()
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        // given:
        let request = SendMessageRequest {
            from: "alice".to_string(),
            to: "bob".to_string(),
            kind: "sticker".to_string(),
            text: None,
            media_url: None,
        };

        // when:
        let result = request.into_domain();

        // then:
        assert_eq!(result, Err(DomainError::UnknownKind("sticker".to_string())));
    }

    #[test]
    fn test_text_kind_without_text_payload_is_rejected() {
        // given:
        let request = SendMessageRequest {
            from: "alice".to_string(),
            to: "bob".to_string(),
            kind: "text".to_string(),
            text: None,
            media_url: Some("https://cdn.example/img.png".to_string()),
        };

        // when:
        let result = request.into_domain();

        // then:
        assert_eq!(result, Err(DomainError::InvalidTextBody));
    }
}
