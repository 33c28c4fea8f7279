// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers;
use crate::services::AppointmentBookingService;

/// The booking service is built once per process: its per-doctor lock
/// registry must span every request to serialize concurrent bookings.
pub fn appointment_routes(config: Arc<AppConfig>) -> Router {
    let service = Arc::new(AppointmentBookingService::new(&config));

    Router::new()
        .route("/", post(handlers::book_appointment))
        .route("/", get(handlers::list_appointments_by_date))
        .with_state(service)
}
