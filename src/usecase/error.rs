//! UseCase error types.

use crate::domain::{DomainError, StoreError};

/// Errors surfaced by `SendMessageUseCase`
///
/// Both variants are reported synchronously to the caller; push delivery
/// never produces an error (best-effort by design).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SendMessageError {
    /// Rejected before any persistence attempt
    #[error("invalid message: {0}")]
    InvalidMessage(String),
    /// The store could not durably record the message; nothing was pushed
    #[error(transparent)]
    PersistenceFailure(#[from] StoreError),
}

impl From<DomainError> for SendMessageError {
    fn from(err: DomainError) -> Self {
        Self::InvalidMessage(err.to_string())
    }
}

/// Errors surfaced by `MarkSeenUseCase`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkSeenError {
    #[error(transparent)]
    PersistenceFailure(#[from] StoreError),
}

/// Errors surfaced by the read-path usecases (history, summaries)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    PersistenceFailure(#[from] StoreError),
}
