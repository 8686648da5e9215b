use serde_json::json;

use crate::models::{ChatResponse, Classification, IntentLabel, ReplyAction, ServiceLabel};

const PRICING_REPLY: &str = "Approximate pricing: plumber/electrician visits start at ₹199. \
Final amount depends on the job. Would you like me to book someone?";
const STATUS_REPLY: &str = "Please share your booking ID to check the status (e.g., BK-12345).";
const CANCEL_REPLY: &str = "Please share your booking ID to cancel the booking.";
const RESCHEDULE_REPLY: &str = "Please share your booking ID and the new preferred date/time.";
const HELP_REPLY: &str = "I'm your society assistant. You can say things like: \
'Need a plumber today 6 pm', 'Check status BK-12345', or 'Cancel BK-12345'.";

pub fn compose(classification: &Classification, user_name: &str) -> ChatResponse {
    match classification.intent {
        IntentLabel::Greeting => ChatResponse::new(
            format!(
                "Hi {user_name}! I can help you book services (plumber, electrician, cleaner, etc.), \
check booking status, or cancel/reschedule. What do you need?"
            ),
            ReplyAction::Greeting,
        ),
        IntentLabel::Pricing => ChatResponse::new(PRICING_REPLY, ReplyAction::Pricing),
        IntentLabel::StatusCheck => ChatResponse::new(STATUS_REPLY, ReplyAction::StatusCheck),
        IntentLabel::CancelBooking => ChatResponse::new(CANCEL_REPLY, ReplyAction::CancelBooking),
        IntentLabel::RescheduleBooking => {
            ChatResponse::new(RESCHEDULE_REPLY, ReplyAction::RescheduleBooking)
        }
        IntentLabel::BookService => {
            let service = classification.service.unwrap_or(ServiceLabel::General);
            ChatResponse::new(
                format!(
                    "Sure. Booking a {}. Please share preferred date/time and your flat number.",
                    service.as_str()
                ),
                ReplyAction::CollectBookingDetails,
            )
            .with_data(json!({ "service_type": service.as_str() }))
        }
        IntentLabel::Help | IntentLabel::Other => ChatResponse::new(HELP_REPLY, ReplyAction::Help),
    }
}
