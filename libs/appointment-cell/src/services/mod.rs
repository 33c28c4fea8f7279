pub mod booking;
pub mod conflict;
pub mod locks;
pub mod schedule;
pub mod validation;

pub use booking::AppointmentBookingService;
pub use schedule::ScheduleService;
