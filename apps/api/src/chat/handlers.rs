//! Axum route handler for the chat playground.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::debug;

use crate::chat::models::{ChatRequest, ChatResponse};
use crate::chat::prompts;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /chat
///
/// Resolves the requested mode to a system prompt and forwards the message to
/// the provider. Body rejections return 4xx before any provider call.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;

    let system_prompt = prompts::resolve(&request.mode);
    debug!(
        mode = %request.mode,
        message_len = request.message.len(),
        "Forwarding chat message"
    );

    let response = state.llm.complete(system_prompt, &request.message).await?;

    Ok(Json(ChatResponse { response }))
}
