use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SendRequest {
    pub to: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct SendResponse {
    pub success: bool,
    pub message_sid: String,
}

// POST /send
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SendRequest>,
) -> Result<Json<SendResponse>, AppError> {
    let Some(messaging) = state.messaging.as_deref() else {
        return Err(AppError::BadRequest("Twilio client not configured".to_string()));
    };

    let to = request.to.as_deref().map(str::trim).unwrap_or("");
    let body = request.message.as_deref().map(str::trim).unwrap_or("");
    if to.is_empty() || body.is_empty() {
        return Err(AppError::BadRequest(
            "Missing 'to' or 'message' in request".to_string(),
        ));
    }

    let message_sid = messaging.send_message(to, body).await.map_err(|e| {
        tracing::error!(error = %e, to = %to, "failed to send WhatsApp message");
        AppError::Messaging(e.to_string())
    })?;

    tracing::info!(to = %to, sid = %message_sid, "message sent");

    Ok(Json(SendResponse {
        success: true,
        message_sid,
    }))
}
