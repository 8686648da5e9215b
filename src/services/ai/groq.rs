use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{with_system_prompt, LlmProvider, Message};

const COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

pub struct GroqProvider {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GroqProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

impl CompletionResponse {
    fn into_content(self) -> anyhow::Result<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("Groq response has no choices")
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String> {
        // JSON mode at temperature 0: one parseable, repeatable answer per prompt.
        let request = CompletionRequest {
            model: &self.model,
            messages: with_system_prompt(system_prompt, messages),
            temperature: 0.0,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let completion: CompletionResponse = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("failed to call Groq API")?
            .error_for_status()
            .context("Groq API returned error")?
            .json()
            .await
            .context("failed to parse Groq response")?;

        completion.into_content()
    }
}
