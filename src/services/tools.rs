use crate::config::ANALYTICS_TARGET;
use crate::models::{BookServiceRequest, BookingRecord, BookingStatus, StatusRecord};

pub const STATUS_ETA: &str = "Today, 6:00 PM";

/// Mints a fresh `BK-XXXXXXXX` id and echoes the request back. Ids are not
/// checked for collisions.
pub fn book_service(request: BookServiceRequest) -> BookingRecord {
    let token: String = uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect();
    let booking_id = format!("BK-{}", token.to_uppercase());
    let confirmation = format!(
        "Booking confirmed for {}",
        request.service_type.as_deref().unwrap_or("service")
    );

    tracing::info!(booking_id = %booking_id, service_type = ?request.service_type, "booking created");
    tracing::info!(
        target: ANALYTICS_TARGET,
        service_type = request.service_type.as_deref().unwrap_or("service"),
        "booking created"
    );

    BookingRecord {
        booking_id,
        confirmation,
        service_type: request.service_type,
        date: request.date,
        time: request.time,
        apartment_unit: request.apartment_unit,
        contact_name: request.contact_name,
        phone: request.phone,
        problem_summary: request.problem_summary,
    }
}

/// Status is a checksum of the id's characters, so the same id always
/// reports the same status. An empty id maps to `Created`.
pub fn check_status(booking_id: &str) -> StatusRecord {
    let checksum: u64 = booking_id.chars().map(|c| c as u64).sum();
    let index = (checksum % BookingStatus::ALL.len() as u64) as usize;
    let status = BookingStatus::ALL[index];
    tracing::debug!(booking_id, status = status.as_str(), "status lookup");

    StatusRecord {
        booking_id: booking_id.to_string(),
        status,
        eta: status.has_eta().then(|| STATUS_ETA.to_string()),
    }
}
