//! Lookup outcomes handed to the presentation layer.

use std::fmt;

use serde::Serialize;

use crate::date::ScheduleDate;

/// Why a lookup found no scheduled assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum LookupMiss {
    /// The date has no entry in the schedule.
    DateNotFound { date: ScheduleDate },
    /// The date exists but neither an exact nor a normalized surgeon matches.
    SurgeonNotFound { date: ScheduleDate, surgeon: String },
}

impl LookupMiss {
    pub fn date(&self) -> &ScheduleDate {
        match self {
            Self::DateNotFound { date } | Self::SurgeonNotFound { date, .. } => date,
        }
    }
}

impl fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateNotFound { date } => write!(f, "no schedule for {date}"),
            Self::SurgeonNotFound { date, surgeon } => {
                write!(f, "no assignment for {surgeon} on {date}")
            }
        }
    }
}

/// How an assignment was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssignmentSource {
    /// Surgeon key matched as given.
    Exact,
    /// Surgeon matched after honorific normalization; `matched` is the key
    /// found in the schedule.
    Normalized { matched: String },
    /// Nothing was scheduled; the name was drawn from the fallback roster.
    RandomFallback { miss: LookupMiss },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub anesthesiologist: String,
    pub source: AssignmentSource,
}

impl Assignment {
    pub fn exact(anesthesiologist: impl Into<String>) -> Self {
        Self {
            anesthesiologist: anesthesiologist.into(),
            source: AssignmentSource::Exact,
        }
    }

    /// True when the name was fabricated by the fallback policy.
    pub fn is_random(&self) -> bool {
        matches!(self.source, AssignmentSource::RandomFallback { .. })
    }
}

/// Result of resolving a date and surgeon against the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum LookupOutcome {
    Found(Assignment),
    NotFound(LookupMiss),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Self::Found(assignment) => Some(assignment),
            Self::NotFound(_) => None,
        }
    }
}
