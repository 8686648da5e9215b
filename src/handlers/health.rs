use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;

use crate::state::AppState;

// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": state.config.bot_name,
    }))
}

// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(format!(
        "<h1>{name}</h1>\
<p>Bot is running and ready to receive messages!</p>\
<p>Configure your Twilio WhatsApp webhook URL to point to: <code>/webhook/whatsapp</code></p>\
<p>Ticket webhooks are accepted as JSON at <code>/webhook</code>.</p>\
<ul><li><a href=\"/health\">Health Check</a></li></ul>",
        name = state.config.bot_name
    ))
}
