use serde::Deserialize;

use crate::models::{Classification, IntentLabel, ServiceLabel};
use crate::services::ai::{LlmProvider, Message};

const SYSTEM_PROMPT: &str = r#"You classify WhatsApp messages sent by residents of a housing society to their service desk. Messages may be in English, Hindi, or Hindi written in Latin script.

Return ONLY valid JSON (no markdown, no explanation) with this exact structure:
{
  "intent": "greeting|help|pricing|status_check|cancel_booking|reschedule_booking|book_service|other",
  "service_type": "plumber|electrician|carpenter|cleaner|pest_control|guard|general or null",
  "confidence": 0.0
}

Intent rules:
- "greeting": hello/hi/namaste with no other request
- "help": asks what the assistant can do
- "pricing": asks about cost, rates or charges
- "status_check": asks where a technician is or what happened to a booking
- "cancel_booking": wants to cancel an existing booking
- "reschedule_booking": wants to move an existing booking to another time
- "book_service": wants a technician or service visit; set service_type
- "other": anything else

service_type is only set for "book_service"; use "general" when the trade is unclear.
confidence is your certainty between 0 and 1.
"#;

#[derive(Debug, Clone, Deserialize)]
struct RawIntent {
    intent: String,
    #[serde(default)]
    service_type: Option<String>,
    #[serde(default)]
    confidence: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmClassification {
    pub classification: Classification,
    pub confidence: f32,
}

pub async fn extract_intent(llm: &dyn LlmProvider, text: &str) -> anyhow::Result<LlmClassification> {
    let messages = [Message::user(text)];

    let response = llm.chat(SYSTEM_PROMPT, &messages).await?;

    Ok(parse_intent_response(&response))
}

fn parse_intent_response(response: &str) -> LlmClassification {
    if let Some(raw) = find_json(response) {
        return normalize(raw);
    }

    tracing::warn!("failed to parse LLM response as intent JSON, using fallback");
    LlmClassification {
        classification: Classification::intent(IntentLabel::Other),
        confidence: 0.0,
    }
}

fn find_json(response: &str) -> Option<RawIntent> {
    // Try direct parse first
    if let Ok(raw) = serde_json::from_str::<RawIntent>(response) {
        return Some(raw);
    }

    // Strip markdown code fences
    let trimmed = response.trim();
    let cleaned = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned).trim();

    if let Ok(raw) = serde_json::from_str::<RawIntent>(cleaned) {
        return Some(raw);
    }

    // Try to find JSON object in the response
    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str::<RawIntent>(&cleaned[start..=end]).ok()
}

fn normalize(raw: RawIntent) -> LlmClassification {
    let intent = IntentLabel::parse(&raw.intent);
    let classification = match intent {
        IntentLabel::BookService => Classification::booking(
            raw.service_type
                .as_deref()
                .map(ServiceLabel::parse)
                .unwrap_or(ServiceLabel::General),
        ),
        other => Classification::intent(other),
    };

    let confidence = raw
        .confidence
        .filter(|c| c.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    LlmClassification {
        classification,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_json() {
        let json = r#"{"intent":"book_service","service_type":"electrician","confidence":0.92}"#;
        let result = parse_intent_response(json);
        assert_eq!(
            result.classification,
            Classification::booking(ServiceLabel::Electrician)
        );
        assert!((result.confidence - 0.92).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_markdown_fenced_json() {
        let json = "```json\n{\"intent\":\"cancel_booking\",\"service_type\":null,\"confidence\":0.8}\n```";
        let result = parse_intent_response(json);
        assert_eq!(result.classification.intent, IntentLabel::CancelBooking);
        assert_eq!(result.classification.service, None);
    }

    #[test]
    fn test_parse_json_inside_prose() {
        let raw = "Sure! Here you go: {\"intent\":\"pricing\",\"confidence\":0.75} hope that helps";
        let result = parse_intent_response(raw);
        assert_eq!(result.classification.intent, IntentLabel::Pricing);
    }

    #[test]
    fn test_parse_fallback() {
        let raw = "I don't understand the format you want";
        let result = parse_intent_response(raw);
        assert_eq!(result.classification.intent, IntentLabel::Other);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_booking_without_service_is_general() {
        let result = parse_intent_response(r#"{"intent":"book_service","confidence":0.9}"#);
        assert_eq!(result.classification, Classification::booking(ServiceLabel::General));
    }

    #[test]
    fn test_unknown_labels_degrade() {
        let result = parse_intent_response(
            r#"{"intent":"order_pizza","service_type":"chef","confidence":0.99}"#,
        );
        assert_eq!(result.classification, Classification::intent(IntentLabel::Other));

        let result = parse_intent_response(
            r#"{"intent":"book_service","service_type":"chef","confidence":0.99}"#,
        );
        assert_eq!(result.classification, Classification::booking(ServiceLabel::General));
    }

    #[test]
    fn test_service_dropped_for_non_booking_intent() {
        let result = parse_intent_response(
            r#"{"intent":"status_check","service_type":"plumber","confidence":0.9}"#,
        );
        assert_eq!(result.classification.service, None);
    }

    #[test]
    fn test_confidence_clamped_and_defaulted() {
        let high = parse_intent_response(r#"{"intent":"help","confidence":3.5}"#);
        assert_eq!(high.confidence, 1.0);
        let missing = parse_intent_response(r#"{"intent":"help"}"#);
        assert_eq!(missing.confidence, 0.0);
    }
}
