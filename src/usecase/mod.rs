//! UseCase layer: the delivery engine's operations.
//!
//! Each usecase depends only on the domain traits; wiring to the concrete
//! store, registry and pusher happens in the binary.

pub mod error;
pub mod get_history;
pub mod mark_seen;
pub mod send_message;
pub mod summarize_conversations;

pub use error::{MarkSeenError, QueryError, SendMessageError};
pub use get_history::GetHistoryUseCase;
pub use mark_seen::MarkSeenUseCase;
pub use send_message::SendMessageUseCase;
pub use summarize_conversations::SummarizeConversationsUseCase;
