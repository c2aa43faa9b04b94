//! Direct-message delivery server.
//!
//! Persists messages to the store, then fans them out to the sender's and
//! recipient's rooms over WebSocket.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use hikyaku::{
    common::{logger::setup_logger, time::SystemClock},
    infrastructure::{
        pusher::WebSocketRoomPusher, registry::InMemoryRoomRegistry, store::InMemoryMessageStore,
    },
    ui::Server,
    usecase::{
        GetHistoryUseCase, MarkSeenUseCase, SendMessageUseCase, SummarizeConversationsUseCase,
    },
};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Direct-message delivery server with room-based fan-out", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Store + Registry
    // 2. Pusher
    // 3. UseCases
    // 4. Server

    // 1. Message store (in-memory reference implementation) and room registry
    let store = Arc::new(InMemoryMessageStore::new(Arc::new(SystemClock)));
    let registry = Arc::new(InMemoryRoomRegistry::new());

    // 2. Room pusher (WebSocket implementation)
    let pusher = Arc::new(WebSocketRoomPusher::new(registry.clone()));

    // 3. UseCases
    let send_message_usecase = Arc::new(SendMessageUseCase::new(store.clone(), pusher.clone()));
    let mark_seen_usecase = Arc::new(MarkSeenUseCase::new(store.clone(), pusher.clone()));
    let get_history_usecase = Arc::new(GetHistoryUseCase::new(store.clone()));
    let summarize_usecase = Arc::new(SummarizeConversationsUseCase::new(store.clone()));

    // 4. Create and run the server
    let server = Server::new(
        send_message_usecase,
        mark_seen_usecase,
        get_history_usecase,
        summarize_usecase,
        registry,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
