//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::domain::RoomRegistry;
use crate::usecase::{
    GetHistoryUseCase, MarkSeenUseCase, SendMessageUseCase, SummarizeConversationsUseCase,
};

use super::{
    handler::{
        get_conversations, get_history, health_check, mark_seen, send_message, websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Direct-message delivery server
///
/// Encapsulates the wired usecases and runs the HTTP/WebSocket surface.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     send_message_usecase,
///     mark_seen_usecase,
///     get_history_usecase,
///     summarize_usecase,
///     registry,
/// );
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    send_message_usecase: Arc<SendMessageUseCase>,
    mark_seen_usecase: Arc<MarkSeenUseCase>,
    get_history_usecase: Arc<GetHistoryUseCase>,
    summarize_usecase: Arc<SummarizeConversationsUseCase>,
    registry: Arc<dyn RoomRegistry>,
}

impl Server {
    pub fn new(
        send_message_usecase: Arc<SendMessageUseCase>,
        mark_seen_usecase: Arc<MarkSeenUseCase>,
        get_history_usecase: Arc<GetHistoryUseCase>,
        summarize_usecase: Arc<SummarizeConversationsUseCase>,
        registry: Arc<dyn RoomRegistry>,
    ) -> Self {
        Self {
            send_message_usecase,
            mark_seen_usecase,
            get_history_usecase,
            summarize_usecase,
            registry,
        }
    }

    /// Run the delivery server.
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address
    /// or if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            send_message_usecase: self.send_message_usecase,
            mark_seen_usecase: self.mark_seen_usecase,
            get_history_usecase: self.get_history_usecase,
            summarize_usecase: self.summarize_usecase,
            registry: self.registry,
        });

        let app = Router::new()
            // WebSocket gateway
            .route("/ws", get(websocket_handler))
            // HTTP endpoints
            .route("/api/health", get(health_check))
            .route("/api/messages", post(send_message))
            .route("/api/messages/seen", post(mark_seen))
            .route("/api/messages/history", get(get_history))
            .route("/api/conversations/{user_id}", get(get_conversations))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!(
            "Delivery server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
