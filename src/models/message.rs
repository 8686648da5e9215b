use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_NAME: &str = "User";
pub const UNKNOWN_SENDER: &str = "unknown";

/// One inbound user message, independent of the transport it arrived on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub text: String,
    pub sender_id: String,
    pub sender_name: Option<String>,
}

impl InboundMessage {
    pub fn display_name(&self) -> &str {
        self.sender_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_USER_NAME)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookUser {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookFields {
    pub name: Option<String>,
    pub content: Option<String>,
    pub priority: Option<i64>,
    pub status: Option<i64>,
    pub entities_id: Option<i64>,
}

/// Ticket-style webhook event. Only `user` and `fields.content` are read;
/// everything else is carried through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookPayload {
    pub event: Option<String>,
    pub itemtype: Option<String>,
    pub items_id: Option<i64>,
    pub date: Option<String>,
    pub user: Option<WebhookUser>,
    pub fields: Option<WebhookFields>,
}

impl From<&WebhookPayload> for InboundMessage {
    fn from(payload: &WebhookPayload) -> Self {
        let text = payload
            .fields
            .as_ref()
            .and_then(|f| f.content.clone())
            .unwrap_or_default();
        let sender_id = payload
            .user
            .as_ref()
            .and_then(|u| u.id)
            .map(|id| id.to_string())
            .unwrap_or_else(|| UNKNOWN_SENDER.to_string());
        let sender_name = payload.user.as_ref().and_then(|u| u.name.clone());

        InboundMessage {
            text,
            sender_id,
            sender_name,
        }
    }
}
