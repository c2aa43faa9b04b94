//! Server state shared across handlers.

use std::sync::Arc;

use crate::domain::RoomRegistry;
use crate::usecase::{
    GetHistoryUseCase, MarkSeenUseCase, SendMessageUseCase, SummarizeConversationsUseCase,
};

/// Shared application state
pub struct AppState {
    /// Delivery engine: send path
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// Delivery engine: seen-state path
    pub mark_seen_usecase: Arc<MarkSeenUseCase>,
    /// Read path: full history
    pub get_history_usecase: Arc<GetHistoryUseCase>,
    /// Read path: conversation summaries
    pub summarize_usecase: Arc<SummarizeConversationsUseCase>,
    /// Room membership, driven by the connection gateway
    pub registry: Arc<dyn RoomRegistry>,
}
