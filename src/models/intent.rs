use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    Greeting,
    Help,
    Pricing,
    StatusCheck,
    CancelBooking,
    RescheduleBooking,
    BookService,
    Other,
}

impl IntentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentLabel::Greeting => "greeting",
            IntentLabel::Help => "help",
            IntentLabel::Pricing => "pricing",
            IntentLabel::StatusCheck => "status_check",
            IntentLabel::CancelBooking => "cancel_booking",
            IntentLabel::RescheduleBooking => "reschedule_booking",
            IntentLabel::BookService => "book_service",
            IntentLabel::Other => "other",
        }
    }

    /// Lenient parse for labels coming back from an LLM. Unknown text is `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "greeting" => IntentLabel::Greeting,
            "help" => IntentLabel::Help,
            "pricing" => IntentLabel::Pricing,
            "status_check" => IntentLabel::StatusCheck,
            "cancel_booking" => IntentLabel::CancelBooking,
            "reschedule_booking" => IntentLabel::RescheduleBooking,
            "book_service" => IntentLabel::BookService,
            _ => IntentLabel::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceLabel {
    Plumber,
    Electrician,
    Carpenter,
    Cleaner,
    PestControl,
    Guard,
    General,
}

impl ServiceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceLabel::Plumber => "plumber",
            ServiceLabel::Electrician => "electrician",
            ServiceLabel::Carpenter => "carpenter",
            ServiceLabel::Cleaner => "cleaner",
            ServiceLabel::PestControl => "pest_control",
            ServiceLabel::Guard => "guard",
            ServiceLabel::General => "general",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "plumber" => ServiceLabel::Plumber,
            "electrician" => ServiceLabel::Electrician,
            "carpenter" => ServiceLabel::Carpenter,
            "cleaner" => ServiceLabel::Cleaner,
            "pest_control" => ServiceLabel::PestControl,
            "guard" => ServiceLabel::Guard,
            _ => ServiceLabel::General,
        }
    }
}

/// Outcome of classifying one message. `service` is set only for `BookService`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classification {
    pub intent: IntentLabel,
    pub service: Option<ServiceLabel>,
}

impl Classification {
    pub fn intent(intent: IntentLabel) -> Self {
        match intent {
            IntentLabel::BookService => Self::booking(ServiceLabel::General),
            other => Self {
                intent: other,
                service: None,
            },
        }
    }

    pub fn booking(service: ServiceLabel) -> Self {
        Self {
            intent: IntentLabel::BookService,
            service: Some(service),
        }
    }
}
