//! Date + surgeon → anesthesiologist.

use rand::Rng;
use tracing::{debug, warn};

use anesth_model::{
    Assignment, AssignmentSource, LookupMiss, LookupOutcome, ScheduleDate, ScheduleIndex,
};

use crate::error::Result;
use crate::policy::MissPolicy;

/// Policy-free match: exact surgeon key first, then the first key of that
/// day (in insertion order) that is name-equivalent.
pub fn find_assignment(
    date: &ScheduleDate,
    surgeon: &str,
    index: &ScheduleIndex,
) -> std::result::Result<Assignment, LookupMiss> {
    let Some(day) = index.day(date) else {
        return Err(LookupMiss::DateNotFound { date: *date });
    };
    if let Some(anesth) = day.get(surgeon) {
        return Ok(Assignment::exact(anesth));
    }
    if let Some((matched, anesth)) = day.find_equivalent(surgeon) {
        debug!(%date, surgeon, matched, "surgeon matched after name normalization");
        return Ok(Assignment {
            anesthesiologist: anesth.to_string(),
            source: AssignmentSource::Normalized {
                matched: matched.to_string(),
            },
        });
    }
    Err(LookupMiss::SurgeonNotFound {
        date: *date,
        surgeon: surgeon.to_string(),
    })
}

/// Resolves lookups against a schedule index under one [`MissPolicy`].
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    policy: MissPolicy,
}

impl Resolver {
    pub fn new(policy: MissPolicy) -> Self {
        Self { policy }
    }

    pub fn strict() -> Self {
        Self::new(MissPolicy::Strict)
    }

    pub fn policy(&self) -> &MissPolicy {
        &self.policy
    }

    pub fn resolve(
        &self,
        date: &ScheduleDate,
        surgeon: &str,
        index: &ScheduleIndex,
    ) -> LookupOutcome {
        self.resolve_with_rng(date, surgeon, index, &mut rand::thread_rng())
    }

    /// Same as [`Resolver::resolve`] with a caller-supplied random source.
    pub fn resolve_with_rng<R: Rng>(
        &self,
        date: &ScheduleDate,
        surgeon: &str,
        index: &ScheduleIndex,
        rng: &mut R,
    ) -> LookupOutcome {
        match find_assignment(date, surgeon, index) {
            Ok(assignment) => LookupOutcome::Found(assignment),
            Err(miss) => self.on_miss(miss, rng),
        }
    }

    /// Resolves a `YYYY-MM-DD` date as sent by date pickers.
    pub fn resolve_iso(
        &self,
        iso_date: &str,
        surgeon: &str,
        index: &ScheduleIndex,
    ) -> Result<LookupOutcome> {
        let date = ScheduleDate::from_iso(iso_date)?;
        Ok(self.resolve(&date, surgeon, index))
    }

    fn on_miss<R: Rng>(&self, miss: LookupMiss, rng: &mut R) -> LookupOutcome {
        match &self.policy {
            MissPolicy::Strict => {
                debug!(%miss, "lookup miss");
                LookupOutcome::NotFound(miss)
            }
            MissPolicy::RandomFallback(roster) => {
                let anesthesiologist = roster.draw(rng).to_string();
                warn!(
                    %miss,
                    anesthesiologist = %anesthesiologist,
                    "no scheduled assignment, answering with a random fallback name"
                );
                LookupOutcome::Found(Assignment {
                    anesthesiologist,
                    source: AssignmentSource::RandomFallback { miss },
                })
            }
        }
    }
}
