// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use chrono::Utc;
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;
use doctor_cell::models::Doctor;
use patient_cell::models::Patient;

use crate::models::{
    Appointment, AppointmentError, AppointmentValidationRules, BookAppointmentRequest,
    NewAppointment,
};
use crate::services::locks::DoctorScheduleLocks;
use crate::services::schedule::ScheduleService;
use crate::services::validation::validate_booking;

pub struct AppointmentBookingService {
    supabase: Arc<SupabaseClient>,
    schedule_service: ScheduleService,
    doctor_locks: DoctorScheduleLocks,
    validation_rules: AppointmentValidationRules,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig) -> Self {
        let supabase = Arc::new(SupabaseClient::new(config));
        let schedule_service = ScheduleService::new(Arc::clone(&supabase));

        Self {
            supabase,
            schedule_service,
            doctor_locks: DoctorScheduleLocks::new(),
            validation_rules: AppointmentValidationRules::default(),
        }
    }

    /// Book an appointment: load the doctor, patient, and the doctor's
    /// existing bookings, run the rule engine, and persist on acceptance.
    ///
    /// The whole check-and-insert runs under the doctor's booking lock so
    /// concurrent requests for the same doctor are evaluated one at a time.
    pub async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        info!("Booking appointment for patient {} with doctor {}",
              request.patient_id, request.doctor_id);

        self.validate_booking_request(&request)?;

        let lock = self.doctor_locks.lock_for(request.doctor_id);
        let _guard = lock.lock().await;

        let doctor = self.fetch_doctor(request.doctor_id).await?;
        let patient = self.fetch_patient(request.patient_id).await?;
        let existing = self.fetch_doctor_appointments(request.doctor_id).await?;

        let prepared = match validate_booking(
            &request,
            doctor.as_ref(),
            patient.as_ref(),
            &existing,
            Utc::now(),
        ) {
            Ok(prepared) => prepared,
            Err(e) => {
                warn!("Booking rejected for doctor {}: {}", request.doctor_id, e);
                return Err(e);
            }
        };

        let appointment = self.insert_appointment(prepared).await?;

        info!("Appointment {} booked with doctor {}", appointment.id, request.doctor_id);
        Ok(appointment)
    }

    /// List appointments whose start falls on the given calendar date (UTC).
    pub async fn list_for_date(
        &self,
        date: chrono::NaiveDate,
        doctor_id: Option<Uuid>,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        self.schedule_service.list_for_date(date, doctor_id).await
    }

    // ==============================================================================
    // PRIVATE HELPER METHODS
    // ==============================================================================

    fn validate_booking_request(&self, request: &BookAppointmentRequest) -> Result<(), AppointmentError> {
        if request.duration_minutes < self.validation_rules.min_appointment_duration {
            return Err(AppointmentError::ValidationError(
                format!("Appointment duration must be at least {} minutes",
                       self.validation_rules.min_appointment_duration)
            ));
        }

        if request.duration_minutes > self.validation_rules.max_appointment_duration {
            return Err(AppointmentError::ValidationError(
                format!("Appointment duration cannot exceed {} minutes",
                       self.validation_rules.max_appointment_duration)
            ));
        }

        Ok(())
    }

    async fn fetch_doctor(&self, doctor_id: Uuid) -> Result<Option<Doctor>, AppointmentError> {
        let path = format!("/rest/v1/doctors?id=eq.{}", doctor_id);
        let result: Vec<Value> = self.supabase.request(
            Method::GET,
            &path,
            None,
        ).await.map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        result.into_iter().next()
            .map(|row| serde_json::from_value(row)
                .map_err(|e| AppointmentError::DatabaseError(format!("Failed to parse doctor: {}", e))))
            .transpose()
    }

    async fn fetch_patient(&self, patient_id: Uuid) -> Result<Option<Patient>, AppointmentError> {
        let path = format!("/rest/v1/patients?id=eq.{}", patient_id);
        let result: Vec<Value> = self.supabase.request(
            Method::GET,
            &path,
            None,
        ).await.map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        result.into_iter().next()
            .map(|row| serde_json::from_value(row)
                .map_err(|e| AppointmentError::DatabaseError(format!("Failed to parse patient: {}", e))))
            .transpose()
    }

    async fn fetch_doctor_appointments(
        &self,
        doctor_id: Uuid,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Fetching existing appointments for doctor {}", doctor_id);

        let path = format!("/rest/v1/appointments?doctor_id=eq.{}&order=start_time.asc", doctor_id);
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

    async fn insert_appointment(
        &self,
        prepared: NewAppointment,
    ) -> Result<Appointment, AppointmentError> {
        let appointment_data = json!({
            "patient_id": prepared.patient_id,
            "doctor_id": prepared.doctor_id,
            "start_time": prepared.start_time.to_rfc3339(),
            "duration_minutes": prepared.duration_minutes,
            "created_at": Utc::now().to_rfc3339()
        });

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("Prefer", reqwest::header::HeaderValue::from_static("return=representation"));

        let result: Vec<Value> = self.supabase.request_with_headers(
            Method::POST,
            "/rest/v1/appointments",
            Some(appointment_data),
            Some(headers),
        ).await.map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(AppointmentError::DatabaseError("Failed to create appointment".to_string()));
        }

        serde_json::from_value(result[0].clone())
            .map_err(|e| AppointmentError::DatabaseError(format!("Failed to parse created appointment: {}", e)))
    }
}
