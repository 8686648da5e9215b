use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{BookServiceRequest, BookingRecord, StatusRecord};
use crate::services::tools;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CheckStatusRequest {
    pub booking_id: Option<String>,
}

fn bad_tool_request(e: JsonRejection) -> AppError {
    tracing::warn!(error = %e, "rejected malformed tool request");
    AppError::BadRequest(e.body_text())
}

// POST /api/tools/book_service
pub async fn book_service(
    request: Result<Json<BookServiceRequest>, JsonRejection>,
) -> Result<Json<BookingRecord>, AppError> {
    let Json(request) = request.map_err(bad_tool_request)?;
    Ok(Json(tools::book_service(request)))
}

// POST /api/tools/check_status
pub async fn check_status(
    request: Result<Json<CheckStatusRequest>, JsonRejection>,
) -> Result<Json<StatusRecord>, AppError> {
    let Json(request) = request.map_err(bad_tool_request)?;
    let booking_id = request.booking_id.unwrap_or_default();
    Ok(Json(tools::check_status(&booking_id)))
}
