use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookServiceRequest {
    pub service_type: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub apartment_unit: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub problem_summary: Option<String>,
}

/// Synthetic booking. Nothing is stored; every call mints a new id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRecord {
    pub booking_id: String,
    pub confirmation: String,
    pub service_type: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub apartment_unit: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub problem_summary: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Created,
    Assigned,
    EnRoute,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Order matters: status lookup indexes into this list.
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Created,
        BookingStatus::Assigned,
        BookingStatus::EnRoute,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Created => "created",
            BookingStatus::Assigned => "assigned",
            BookingStatus::EnRoute => "en_route",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn has_eta(&self) -> bool {
        matches!(self, BookingStatus::Assigned | BookingStatus::EnRoute)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusRecord {
    pub booking_id: String,
    pub status: BookingStatus,
    pub eta: Option<String>,
}
