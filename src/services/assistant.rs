use crate::config::ANALYTICS_TARGET;
use crate::models::{ChatResponse, Classification, InboundMessage};
use crate::services::ai::intent::extract_intent;
use crate::services::composer::compose;
use crate::state::AppState;

pub async fn process_message(state: &AppState, message: &InboundMessage) -> ChatResponse {
    let classification = classify(state, &message.text).await;

    tracing::info!(
        sender = %message.sender_id,
        intent = classification.intent.as_str(),
        service = classification.service.map(|s| s.as_str()),
        "detected intent"
    );
    tracing::info!(
        target: ANALYTICS_TARGET,
        intent = classification.intent.as_str(),
        service = classification.service.map(|s| s.as_str()),
        llm = state.llm.is_some(),
        "message classified"
    );

    compose(&classification, message.display_name())
}

/// Uses the LLM when one is configured and confident enough; the keyword
/// rules answer every other case.
pub async fn classify(state: &AppState, text: &str) -> Classification {
    if let Some(llm) = state.llm.as_deref() {
        if !text.trim().is_empty() {
            match extract_intent(llm, text).await {
                Ok(result) if result.confidence >= state.config.llm_min_confidence => {
                    return result.classification;
                }
                Ok(result) => {
                    tracing::debug!(
                        confidence = result.confidence,
                        intent = result.classification.intent.as_str(),
                        "LLM confidence below threshold, using keyword rules"
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, "LLM intent extraction failed, using keyword rules");
                }
            }
        }
    }

    state.classifier.classify(text)
}
