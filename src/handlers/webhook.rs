use std::sync::Arc;

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{ChatResponse, InboundMessage, WebhookPayload};
use crate::services::assistant;
use crate::state::AppState;

const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again later.";

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct WhatsAppWebhookForm {
    #[serde(rename = "From")]
    pub from: Option<String>,
    #[serde(rename = "To")]
    pub to: Option<String>,
    #[serde(rename = "Body")]
    pub body: Option<String>,
    #[serde(rename = "MessageSid")]
    pub message_sid: Option<String>,
    #[serde(rename = "ProfileName")]
    pub profile_name: Option<String>,
}

// POST /webhook
pub async fn chat_webhook(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WebhookPayload>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!(error = %e, "rejected malformed webhook payload");
        AppError::Processing(e.body_text())
    })?;

    let message = InboundMessage::from(&payload);
    tracing::info!(
        sender = %message.sender_id,
        event = payload.event.as_deref().unwrap_or(""),
        items_id = payload.items_id,
        "incoming webhook message"
    );

    Ok(Json(assistant::process_message(&state, &message).await))
}

// POST /webhook/whatsapp
pub async fn whatsapp_webhook(
    State(state): State<Arc<AppState>>,
    form: Result<Form<WhatsAppWebhookForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(e) => {
            tracing::error!(error = %e, "failed to parse WhatsApp webhook form");
            return twiml_response(FALLBACK_REPLY);
        }
    };

    let message = InboundMessage {
        text: form.body.as_deref().unwrap_or("").trim().to_string(),
        sender_id: form.from.as_deref().unwrap_or("").trim().to_string(),
        sender_name: form.profile_name.clone(),
    };

    tracing::info!(
        from = %message.sender_id,
        to = form.to.as_deref().unwrap_or(""),
        sid = form.message_sid.as_deref().unwrap_or(""),
        body = %message.text,
        "incoming WhatsApp message"
    );

    let response = assistant::process_message(&state, &message).await;

    tracing::info!(from = %message.sender_id, reply = %response.reply, "sending WhatsApp reply");

    twiml_response(&response.reply)
}

fn twiml_response(reply: &str) -> Response {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
            xml_escape(reply)
        ),
    )
        .into_response()
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_escape() {
        assert_eq!(
            xml_escape("I'm <here> & \"ready\""),
            "I&apos;m &lt;here&gt; &amp; &quot;ready&quot;"
        );
        assert_eq!(xml_escape("नमस्ते ₹199"), "नमस्ते ₹199");
    }
}
