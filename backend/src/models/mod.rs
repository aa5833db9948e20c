//! Domain models for the storage contract simulator

pub mod event;
pub mod facility;
pub mod schedule;

// Re-exports
pub use event::{Event, EventLog, EventSink, NullSink};
pub use facility::{Facility, FacilityError};
pub use schedule::{ContractSchedule, EventKind, ScheduleError};
