// libs/appointment-cell/src/services/validation.rs
//
// The booking rule engine. Pure with respect to its inputs: the caller loads
// the doctor, patient, and the doctor's existing appointments, and persists
// the returned fields only on acceptance.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use doctor_cell::models::Doctor;
use patient_cell::models::Patient;

use crate::models::{Appointment, AppointmentError, BookAppointmentRequest, NewAppointment};
use crate::services::conflict::find_conflict;

/// Evaluate the booking rules for a proposed appointment.
///
/// Rules are checked in order, first failure wins:
/// 1. doctor exists, 2. doctor active, 3. patient exists,
/// 4. start strictly in the future, 5. no overlap with existing bookings.
///
/// `start_time` is normalized to UTC before any comparison; existing rows are
/// already canonical UTC (the storage boundary re-attaches the offset).
pub fn validate_booking(
    request: &BookAppointmentRequest,
    doctor: Option<&Doctor>,
    patient: Option<&Patient>,
    existing: &[Appointment],
    now: DateTime<Utc>,
) -> Result<NewAppointment, AppointmentError> {
    let doctor = doctor.ok_or(AppointmentError::DoctorNotFound)?;
    if !doctor.active {
        return Err(AppointmentError::DoctorInactive);
    }

    if patient.is_none() {
        return Err(AppointmentError::PatientNotFound);
    }

    let start_time = request.start_time.with_timezone(&Utc);
    let end_time = start_time + Duration::minutes(request.duration_minutes as i64);

    if start_time <= now {
        return Err(AppointmentError::NotInFuture);
    }

    if let Some(conflicting) = find_conflict(start_time, end_time, existing) {
        debug!(
            "Booking for doctor {} at {} conflicts with appointment {}",
            request.doctor_id, start_time, conflicting.id
        );
        return Err(AppointmentError::Conflict);
    }

    Ok(NewAppointment {
        patient_id: request.patient_id,
        doctor_id: request.doctor_id,
        start_time,
        duration_minutes: request.duration_minutes,
    })
}
