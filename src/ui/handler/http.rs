//! HTTP API endpoint handlers.
//!
//! Thin bindings over the usecases: parse the DTO, convert to domain
//! values, map usecase errors to status codes. Validation failures are 400,
//! persistence failures 500; push outcomes never influence the response.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::domain::{ConversationSummary, Message, UserId};
use crate::infrastructure::dto::http::{
    HistoryQuery, MarkSeenRequest, MarkSeenResponse, SendMessageRequest,
};
use crate::usecase::{MarkSeenError, QueryError, SendMessageError};

use super::super::state::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /api/messages`: send a direct message
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>), StatusCode> {
    let (from, to, body) = request.into_domain().map_err(|e| {
        tracing::warn!("Rejected send request: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    match state.send_message_usecase.execute(from, to, body).await {
        Ok(message) => Ok((StatusCode::CREATED, Json(message))),
        Err(SendMessageError::InvalidMessage(reason)) => {
            tracing::warn!("Rejected send request: {}", reason);
            Err(StatusCode::BAD_REQUEST)
        }
        Err(SendMessageError::PersistenceFailure(e)) => {
            tracing::error!("Message was not persisted: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// `POST /api/messages/seen`: mark a conversation as seen
pub async fn mark_seen(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MarkSeenRequest>,
) -> Result<Json<MarkSeenResponse>, StatusCode> {
    let reader = UserId::new(request.reader_id).map_err(|_| StatusCode::BAD_REQUEST)?;
    let peer = UserId::new(request.peer_id).map_err(|_| StatusCode::BAD_REQUEST)?;

    match state.mark_seen_usecase.execute(reader, peer).await {
        Ok(updated) => Ok(Json(MarkSeenResponse { updated })),
        Err(MarkSeenError::PersistenceFailure(e)) => {
            tracing::error!("Seen state was not persisted: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// `GET /api/messages/history?user_a=..&user_b=..`: two-way history
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<Message>>, StatusCode> {
    let user_a = UserId::new(query.user_a).map_err(|_| StatusCode::BAD_REQUEST)?;
    let user_b = UserId::new(query.user_b).map_err(|_| StatusCode::BAD_REQUEST)?;

    match state.get_history_usecase.execute(user_a, user_b).await {
        Ok(messages) => Ok(Json(messages)),
        Err(QueryError::PersistenceFailure(e)) => {
            tracing::error!("History query failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// `GET /api/conversations/{user_id}`: per-peer summaries
pub async fn get_conversations(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ConversationSummary>>, StatusCode> {
    let user = UserId::new(user_id).map_err(|_| StatusCode::BAD_REQUEST)?;

    match state.summarize_usecase.execute(user).await {
        Ok(summaries) => Ok(Json(summaries)),
        Err(QueryError::PersistenceFailure(e)) => {
            tracing::error!("Summary query failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
