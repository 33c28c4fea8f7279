use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use regex::Regex;

use shared_models::error::AppError;
use shared_models::time::utc_timestamp;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(with = "utc_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "utc_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl CreatePatientRequest {
    /// Field validation performed at the request boundary.
    pub fn validate(&self) -> Result<(), PatientError> {
        if self.first_name.is_empty() || self.first_name.len() > 100 {
            return Err(PatientError::ValidationError(
                "first_name must be between 1 and 100 characters".to_string()
            ));
        }
        if self.last_name.is_empty() || self.last_name.len() > 100 {
            return Err(PatientError::ValidationError(
                "last_name must be between 1 and 100 characters".to_string()
            ));
        }
        if !is_valid_email(&self.email) {
            return Err(PatientError::ValidationError(
                format!("invalid email address: {}", self.email)
            ));
        }
        if self.phone_number.len() < 5 || self.phone_number.len() > 20 {
            return Err(PatientError::ValidationError(
                "phone_number must be between 5 and 20 characters".to_string()
            ));
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let email_regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
    ).unwrap();

    email_regex.is_match(email) && email.len() <= 254
}

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum PatientError {
    #[error("Patient not found")]
    NotFound,

    #[error("Patient with email {email} already exists")]
    EmailAlreadyExists { email: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::NotFound => AppError::NotFound(err.to_string()),
            PatientError::EmailAlreadyExists { .. } => AppError::Conflict(err.to_string()),
            PatientError::ValidationError(msg) => AppError::ValidationError(msg),
            PatientError::DatabaseError(msg) => AppError::Database(msg),
        }
    }
}
