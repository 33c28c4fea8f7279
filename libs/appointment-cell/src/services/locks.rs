// libs/appointment-cell/src/services/locks.rs
//
// Single-writer-per-doctor serialization for booking. The read of a doctor's
// existing appointments and the insert of the accepted one are separate
// storage operations; holding the doctor's lock across both closes the
// check-then-insert race, so committed schedules never contain an overlap.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct DoctorScheduleLocks {
    locks: StdMutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl DoctorScheduleLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the booking lock for a doctor, creating it on first use.
    /// The registry lives for the whole process, so every request for the
    /// same doctor contends on the same mutex.
    pub fn lock_for(&self, doctor_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap();
        Arc::clone(locks.entry(doctor_id).or_default())
    }
}
