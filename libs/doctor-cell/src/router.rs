use std::sync::Arc;
use axum::{routing::{get, post}, Router};
use shared_config::AppConfig;

use crate::handlers::*;

pub fn create_doctor_router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", post(create_doctor))
        .route("/{id}", get(get_doctor))
        .with_state(config)
}
