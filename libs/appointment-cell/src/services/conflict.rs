// libs/appointment-cell/src/services/conflict.rs
//
// Temporal overlap detection for a doctor's schedule. Appointments occupy
// half-open intervals [start, end): touching endpoints never conflict, so
// back-to-back bookings are allowed.

use chrono::{DateTime, Utc};

use crate::models::Appointment;

/// Two half-open intervals [start1, end1) and [start2, end2) overlap iff
/// start1 < end2 AND start2 < end1.
pub fn intervals_overlap(
    start1: DateTime<Utc>,
    end1: DateTime<Utc>,
    start2: DateTime<Utc>,
    end2: DateTime<Utc>,
) -> bool {
    start1 < end2 && start2 < end1
}

/// Scan a doctor's existing appointments for one that overlaps the proposed
/// interval. O(n); no ordering assumption, every entry is checked on its own.
pub fn find_conflict<'a>(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    existing: &'a [Appointment],
) -> Option<&'a Appointment> {
    existing.iter().find(|appointment| {
        intervals_overlap(
            start_time,
            end_time,
            appointment.start_time,
            appointment.end_time(),
        )
    })
}
