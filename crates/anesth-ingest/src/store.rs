//! Holder for the currently loaded schedule.

use tracing::{info, warn};

use anesth_model::Schedule;

use crate::builder::{BuildReport, Layout, build_schedule};
use crate::csv::tokenize;
use crate::error::Result;
use crate::source::{ScheduleReader, ScheduleSource};

/// Tokenizes `text` and builds a schedule under `layout`.
pub fn load_schedule(text: &str, layout: Layout) -> (Schedule, BuildReport) {
    let rows = tokenize(text);
    build_schedule(&rows, layout)
}

/// Owns the schedule shared by lookups and the surgeon selector.
///
/// A reload replaces the held schedule only once the new one is fully
/// built; when reading the source fails, whatever was held before stays.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    current: Option<Schedule>,
    last_report: Option<BuildReport>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `source` through `reader`, rebuilds, and swaps in the result.
    pub fn reload<R: ScheduleReader + ?Sized>(
        &mut self,
        reader: &R,
        source: &ScheduleSource,
        layout: Layout,
    ) -> Result<&Schedule> {
        let text = match reader.read_text(source) {
            Ok(text) => text,
            Err(error) => {
                warn!(source = %source, %error, "schedule reload failed, keeping previous data");
                return Err(error);
            }
        };
        info!(source = %source, layout = %layout, "schedule source read");
        Ok(self.replace_from_text(&text, layout))
    }

    /// Rebuilds from in-memory CSV text.
    pub fn replace_from_text(&mut self, text: &str, layout: Layout) -> &Schedule {
        let (schedule, report) = load_schedule(text, layout);
        self.last_report = Some(report);
        self.current.insert(schedule)
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.current.as_ref()
    }

    /// Counters from the last successful build.
    pub fn last_report(&self) -> Option<&BuildReport> {
        self.last_report.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }
}
