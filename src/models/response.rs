use serde::{Deserialize, Serialize};

/// Next step the caller is expected to take after showing the reply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReplyAction {
    Greeting,
    Pricing,
    StatusCheck,
    CancelBooking,
    RescheduleBooking,
    CollectBookingDetails,
    Help,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub success: bool,
    pub reply: String,
    pub action: Option<ReplyAction>,
    pub data: Option<serde_json::Value>,
}

impl ChatResponse {
    pub fn new(reply: impl Into<String>, action: ReplyAction) -> Self {
        Self {
            success: true,
            reply: reply.into(),
            action: Some(action),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}
