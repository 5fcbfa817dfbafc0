//! Command implementations shared by the binary and its tests.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use anesth_ingest::{ScheduleFetcher, ScheduleSource, ScheduleStore};
use anesth_lookup::Resolver;
use anesth_model::{DoctolibLinks, LookupOutcome, Schedule, ScheduleDate};

use crate::config::{Overrides, Settings, load_settings, load_settings_from};
use crate::render::render_outcome;
use crate::table::{schedule_table, surgeon_lines};

/// Exit code for a lookup that found nobody.
pub const EXIT_NOT_FOUND: i32 = 1;
/// Exit code for bad settings, unreadable schedules and invalid dates.
pub const EXIT_FAILURE: i32 = 2;

/// Settings file (explicit or default) with command-line overrides applied.
///
/// An explicit path must load; the default location falls back to defaults.
pub fn resolve_settings(config: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
    let mut settings = match config {
        Some(path) => load_settings_from(path)?,
        None => load_settings(),
    };
    settings.apply(overrides);
    Ok(settings)
}

/// A schedule source that could not be read.
#[derive(Debug)]
pub struct LoadFailure {
    pub source: ScheduleSource,
    pub error: anyhow::Error,
}

/// Reads and builds the schedule named by `settings`.
pub fn load_store(settings: &Settings) -> std::result::Result<ScheduleStore, LoadFailure> {
    let source = settings.source.source();
    let mut store = ScheduleStore::new();
    let loaded = ScheduleFetcher::new(settings.source.fetch_options())
        .and_then(|fetcher| {
            store
                .reload(&fetcher, &source, settings.source.layout)
                .map(|_| ())
        })
        .with_context(|| format!("load schedule from {source}"));
    match loaded {
        Ok(()) => Ok(store),
        Err(error) => Err(LoadFailure { source, error }),
    }
}

/// Text of the `surgeons` command.
pub fn run_surgeons(schedule: &Schedule) -> String {
    surgeon_lines(&schedule.surgeons.sorted_for_display())
}

/// Result of the `lookup` command.
#[derive(Debug)]
pub struct LookupReport {
    pub outcome: LookupOutcome,
    pub output: String,
}

impl LookupReport {
    pub fn exit_code(&self) -> i32 {
        if self.outcome.is_found() {
            0
        } else {
            EXIT_NOT_FOUND
        }
    }
}

/// Runs one lookup; `iso_date` is `YYYY-MM-DD`.
pub fn run_lookup(
    settings: &Settings,
    schedule: &Schedule,
    iso_date: &str,
    surgeon: &str,
    json: bool,
) -> Result<LookupReport> {
    let resolver = Resolver::new(settings.lookup.miss_policy());
    let outcome = resolver
        .resolve_iso(iso_date, surgeon, &schedule.index)
        .context("invalid --date")?;
    info!(
        date = iso_date,
        surgeon,
        found = outcome.is_found(),
        policy = %settings.lookup.policy,
        "lookup"
    );
    let output = if json {
        let mut text = serde_json::to_string_pretty(&outcome).context("serialize outcome")?;
        text.push('\n');
        text
    } else {
        render_outcome(&outcome, &DoctolibLinks::clinic())
    };
    Ok(LookupReport { outcome, output })
}

/// Text of the `schedule` command; `iso_date` narrows it to one day.
pub fn run_schedule(schedule: &Schedule, iso_date: Option<&str>) -> Result<String> {
    let only = iso_date
        .map(ScheduleDate::from_iso)
        .transpose()
        .context("invalid --date")?;
    let table = schedule_table(&schedule.index, only.as_ref(), &DoctolibLinks::clinic());
    Ok(format!("{table}\n"))
}
