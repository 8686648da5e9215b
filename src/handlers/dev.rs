use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{ChatResponse, Classification, InboundMessage};
use crate::services::assistant;
use crate::services::composer::compose;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DevMessage {
    #[serde(alias = "from_phone")]
    pub from: String,
    pub message: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct DevResponse {
    pub classification: Classification,
    #[serde(flatten)]
    pub response: ChatResponse,
}

/// Local testing endpoint: shows what the assistant decided alongside the
/// reply it would send.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DevMessage>, JsonRejection>,
) -> Result<Json<DevResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let message = InboundMessage {
        text: payload.message.trim().to_string(),
        sender_id: payload.from.trim().to_string(),
        sender_name: payload.name,
    };

    let classification = assistant::classify(&state, &message.text).await;
    tracing::debug!(from = %message.sender_id, intent = classification.intent.as_str(), "dev message");
    let response = compose(&classification, message.display_name());

    Ok(Json(DevResponse {
        classification,
        response,
    }))
}
