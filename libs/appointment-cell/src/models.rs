// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

use shared_models::error::AppError;
use shared_models::time::utc_timestamp;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A persisted appointment. `start_time` is always canonical UTC; rows coming
/// back from storage without an offset are re-attached to UTC on deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    #[serde(with = "utc_timestamp")]
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    #[serde(with = "utc_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Derived, never stored.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + Duration::minutes(self.duration_minutes as i64)
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Booking request. `start_time` deserializes only from timezone-aware
/// timestamps; offset-less input is rejected at the schema boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub start_time: DateTime<FixedOffset>,
    pub duration_minutes: i32,
}

/// Validated booking fields, normalized to UTC and ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        let end_time = appointment.end_time();
        Self {
            id: appointment.id,
            patient_id: appointment.patient_id,
            doctor_id: appointment.doctor_id,
            start_time: appointment.start_time,
            duration_minutes: appointment.duration_minutes,
            end_time,
            created_at: appointment.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleQueryParams {
    pub date: NaiveDate,
    pub doctor_id: Option<Uuid>,
}

// ==============================================================================
// VALIDATION MODELS
// ==============================================================================

#[derive(Debug, Clone)]
pub struct AppointmentValidationRules {
    pub min_appointment_duration: i32,
    pub max_appointment_duration: i32,
}

impl Default for AppointmentValidationRules {
    fn default() -> Self {
        Self {
            min_appointment_duration: 15,
            max_appointment_duration: 180,
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AppointmentError {
    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Doctor is inactive")]
    DoctorInactive,

    #[error("Patient not found")]
    PatientNotFound,

    #[error("Appointment must be in the future")]
    NotInFuture,

    #[error("Appointment conflicts with existing booking")]
    Conflict,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The single mapping from booking rejection reasons to transport codes.
impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::DoctorNotFound
            | AppointmentError::PatientNotFound => AppError::NotFound(err.to_string()),
            AppointmentError::DoctorInactive
            | AppointmentError::NotInFuture
            | AppointmentError::Conflict => AppError::Conflict(err.to_string()),
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
            AppointmentError::DatabaseError(msg) => AppError::Database(msg),
        }
    }
}
