// libs/appointment-cell/src/services/schedule.rs
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use shared_database::supabase::SupabaseClient;

use crate::models::{Appointment, AppointmentError};

pub struct ScheduleService {
    supabase: Arc<SupabaseClient>,
}

impl ScheduleService {
    pub fn new(supabase: Arc<SupabaseClient>) -> Self {
        Self { supabase }
    }

    /// List appointments starting within [midnight, next midnight) of the
    /// given calendar date, in the canonical UTC reference, optionally
    /// narrowed to one doctor.
    pub async fn list_for_date(
        &self,
        date: NaiveDate,
        doctor_id: Option<Uuid>,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let start_of_day = date.and_hms_opt(0, 0, 0).unwrap().and_utc();
        let end_of_day = start_of_day + Duration::days(1);

        debug!("Listing appointments from {} to {}", start_of_day, end_of_day);

        let mut query_parts = vec![
            format!("start_time=gte.{}", urlencoding::encode(&start_of_day.to_rfc3339())),
            format!("start_time=lt.{}", urlencoding::encode(&end_of_day.to_rfc3339())),
        ];

        if let Some(doctor_id) = doctor_id {
            query_parts.push(format!("doctor_id=eq.{}", doctor_id));
        }

        let path = format!("/rest/v1/appointments?{}&order=start_time.asc",
                          query_parts.join("&"));

        let result: Vec<Value> = self.supabase.request(
            Method::GET,
            &path,
            None,
        ).await.map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        result.into_iter()
            .map(|row| serde_json::from_value(row))
            .collect::<Result<Vec<Appointment>, _>>()
            .map_err(|e| AppointmentError::DatabaseError(format!("Failed to parse appointments: {}", e)))
    }
}
