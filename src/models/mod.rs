pub mod booking;
pub mod intent;
pub mod message;
pub mod response;

pub use booking::{BookServiceRequest, BookingRecord, BookingStatus, StatusRecord};
pub use intent::{Classification, IntentLabel, ServiceLabel};
pub use message::{InboundMessage, WebhookFields, WebhookPayload, WebhookUser};
pub use response::{ChatResponse, ReplyAction};
