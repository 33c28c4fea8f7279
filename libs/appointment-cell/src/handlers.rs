// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{AppointmentResponse, BookAppointmentRequest, ScheduleQueryParams};
use crate::services::AppointmentBookingService;

#[axum::debug_handler]
pub async fn book_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let appointment = service.book_appointment(request).await?;

    Ok((StatusCode::CREATED, Json(json!(AppointmentResponse::from(appointment)))))
}

#[axum::debug_handler]
pub async fn list_appointments_by_date(
    State(service): State<Arc<AppointmentBookingService>>,
    Query(params): Query<ScheduleQueryParams>,
) -> Result<Json<Value>, AppError> {
    let appointments = service.list_for_date(params.date, params.doctor_id).await?;

    let responses: Vec<AppointmentResponse> = appointments
        .into_iter()
        .map(AppointmentResponse::from)
        .collect();

    Ok(Json(json!(responses)))
}
