//! Data model for the anesthesiologist schedule lookup.

pub mod date;
pub mod error;
pub mod links;
pub mod name;
pub mod outcome;
pub mod schedule;

pub use date::ScheduleDate;
pub use error::{ModelError, Result};
pub use links::DoctolibLinks;
pub use name::{canonical_name, display_sort_key, looks_like_doctor, names_equivalent};
pub use outcome::{Assignment, AssignmentSource, LookupMiss, LookupOutcome};
pub use schedule::{DaySchedule, Schedule, ScheduleIndex, SurgeonSet};
