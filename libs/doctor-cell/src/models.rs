use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

use shared_models::error::AppError;
use shared_models::time::utc_timestamp;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub full_name: String,
    pub specialization: String,
    pub active: bool,
    #[serde(with = "utc_timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub full_name: String,
    pub specialization: String,
}

impl CreateDoctorRequest {
    pub fn validate(&self) -> Result<(), DoctorError> {
        if self.full_name.is_empty() || self.full_name.len() > 200 {
            return Err(DoctorError::ValidationError(
                "full_name must be between 1 and 200 characters".to_string()
            ));
        }
        if self.specialization.is_empty() || self.specialization.len() > 150 {
            return Err(DoctorError::ValidationError(
                "specialization must be between 1 and 150 characters".to_string()
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound => AppError::NotFound(err.to_string()),
            DoctorError::ValidationError(msg) => AppError::ValidationError(msg),
            DoctorError::DatabaseError(msg) => AppError::Database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_field_bounds() {
        let ok = CreateDoctorRequest {
            full_name: "Dr. Niamh Kelly".to_string(),
            specialization: "Cardiology".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty_name = CreateDoctorRequest {
            full_name: String::new(),
            specialization: "Cardiology".to_string(),
        };
        assert!(empty_name.validate().is_err());

        let oversized = CreateDoctorRequest {
            full_name: "Dr. Niamh Kelly".to_string(),
            specialization: "x".repeat(151),
        };
        assert!(oversized.validate().is_err());
    }
}
