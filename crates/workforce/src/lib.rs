//! Cleaning staff: worker records and weekly availability.
//!
//! Pure domain logic; storage and HTTP live in the outer crates.

pub mod schedule;
pub mod worker;

pub use schedule::{time_options, DayAvailability, ShiftTime, WeeklyAvailability};
pub use worker::{Worker, WorkerDocument, WorkerId, WorkerPatch, WorkerProfile, WorkerStatus};
