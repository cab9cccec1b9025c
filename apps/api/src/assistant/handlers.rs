//! Axum route handler for the assistant chat endpoint.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assistant::{service, ChatMessage};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// POST /api/assistant/chat
///
/// Free-text chat. Upstream failures are absorbed by the service's local
/// fallback, so this handler only ever rejects bad input.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = match request.message.as_deref() {
        Some(message) if !message.trim().is_empty() => message.to_string(),
        _ => return Err(AppError::Validation("Message is required".to_string())),
    };

    let preview: String = message.chars().take(50).collect();
    info!("Assistant query: {preview}...");

    let response = service::get_assistant_response(state.ai.as_ref(), &message, &request.history).await;

    Ok(Json(ChatResponse {
        success: true,
        response,
        timestamp: Utc::now(),
    }))
}
