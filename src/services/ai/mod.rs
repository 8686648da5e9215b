pub mod groq;
pub mod intent;
pub mod ollama;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// A chat backend that answers one classification prompt at a time.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String>;
}

/// Both backends take the system prompt as the first chat turn.
fn with_system_prompt(system_prompt: &str, messages: &[Message]) -> Vec<Message> {
    std::iter::once(Message::system(system_prompt))
        .chain(messages.iter().cloned())
        .collect()
}
