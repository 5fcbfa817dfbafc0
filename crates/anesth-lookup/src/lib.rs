//! Anesthesiologist lookup.
//!
//! [`Resolver`] answers "who puts this surgeon's patient to sleep on this
//! date" from a [`anesth_model::ScheduleIndex`]. Matching is exact first,
//! then by normalized doctor name. What happens on a miss is decided by the
//! injected [`MissPolicy`].

mod error;
mod policy;
mod resolver;

pub use error::{LookupError, Result};
pub use policy::{CLINIC_FALLBACK_ROSTER, FallbackRoster, MissPolicy, PolicyKind};
pub use resolver::{Resolver, find_assignment};
