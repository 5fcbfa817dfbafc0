//! Schedule building from tokenized rows.
//!
//! Two export layouts are understood:
//!
//! - **Long**: `date, surgeon, anesthesiologist` per row.
//! - **Wide**: `day, date, <surgeon>, <surgeon>, …` per row, with the
//!   anesthesiologist for each column named in the header row.
//!
//! The layout is chosen by the caller; it is never guessed from the data.
//! Building is best-effort: rows that do not fit are skipped and counted.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use anesth_model::{Schedule, ScheduleDate, ScheduleIndex, SurgeonSet, looks_like_doctor};

/// Column convention of the schedule export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One assignment per row: `date, surgeon, anesthesiologist`.
    #[default]
    Long,
    /// One date per row, anesthesiologists as column headers.
    Wide,
}

impl Layout {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Wide => "wide",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counters describing what a build kept and skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Rows after the header.
    pub data_rows: usize,
    /// Rows with fewer cells than the layout needs.
    pub skipped_short: usize,
    /// Rows whose date cell is not `DD/MM/YYYY`.
    pub skipped_invalid_date: usize,
    /// Assignments written to the index, overwrites included.
    pub assignments: usize,
    /// True when the input had no data row at all.
    pub insufficient_rows: bool,
}

/// Builds the schedule from `rows` (header first) under `layout`.
///
/// Fewer than two rows produce an empty schedule and a warning; this is a
/// recoverable condition, not an error.
pub fn build_schedule(rows: &[Vec<String>], layout: Layout) -> (Schedule, BuildReport) {
    let mut report = BuildReport::default();
    if rows.len() < 2 {
        warn!(
            row_count = rows.len(),
            "not enough rows in schedule CSV (need a header and at least one data row)"
        );
        report.insufficient_rows = true;
        return (Schedule::default(), report);
    }

    let mut builder = Builder::default();
    let header = &rows[0];
    let data = &rows[1..];
    report.data_rows = data.len();

    match layout {
        Layout::Long => builder.long(data, &mut report),
        Layout::Wide => builder.wide(header, data, &mut report),
    }

    let schedule = Schedule::new(builder.index, builder.surgeons);
    info!(
        layout = %layout,
        date_count = schedule.index.date_count(),
        surgeon_count = schedule.surgeons.len(),
        assignments = report.assignments,
        skipped_short = report.skipped_short,
        skipped_invalid_date = report.skipped_invalid_date,
        "schedule loaded"
    );
    (schedule, report)
}

#[derive(Default)]
struct Builder {
    index: ScheduleIndex,
    surgeons: SurgeonSet,
}

impl Builder {
    fn record(&mut self, date: ScheduleDate, surgeon: &str, anesthesiologist: &str) {
        self.index.record(date, surgeon, anesthesiologist);
        self.surgeons.insert(surgeon);
    }

    fn long(&mut self, data: &[Vec<String>], report: &mut BuildReport) {
        for (offset, row) in data.iter().enumerate() {
            let row_number = offset + 2;
            let [date_cell, surgeon, anesth, ..] = row.as_slice() else {
                debug!(row = row_number, cells = row.len(), "skipping short row");
                report.skipped_short += 1;
                continue;
            };
            let Some(date) = parse_date(date_cell, row_number, report) else {
                continue;
            };
            self.index.ensure_date(date);

            let surgeon = surgeon.trim();
            let anesth = anesth.trim();
            if surgeon.is_empty() || anesth.is_empty() {
                debug!(row = row_number, %date, "row has no complete assignment");
                continue;
            }
            self.record(date, surgeon, anesth);
            report.assignments += 1;
        }
    }

    fn wide(&mut self, header: &[String], data: &[Vec<String>], report: &mut BuildReport) {
        // Anesthesiologist per column index; only columns from 2 on.
        let columns: Vec<Option<&str>> = header
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let cell = cell.trim();
                (idx >= 2 && looks_like_doctor(cell)).then_some(cell)
            })
            .collect();
        let named = columns.iter().flatten().count();
        if named == 0 {
            warn!("wide layout header names no anesthesiologist column");
        } else {
            debug!(columns = named, "anesthesiologist columns detected");
        }

        for (offset, row) in data.iter().enumerate() {
            let row_number = offset + 2;
            let Some(date_cell) = row.get(1) else {
                debug!(row = row_number, cells = row.len(), "skipping short row");
                report.skipped_short += 1;
                continue;
            };
            let Some(date) = parse_date(date_cell, row_number, report) else {
                continue;
            };
            self.index.ensure_date(date);

            for (idx, cell) in row.iter().enumerate().skip(2) {
                let surgeon = cell.trim();
                let Some(Some(anesth)) = columns.get(idx) else {
                    continue;
                };
                if surgeon.is_empty() || !looks_like_doctor(surgeon) {
                    continue;
                }
                self.record(date, surgeon, anesth);
                report.assignments += 1;
            }
        }
    }
}

fn parse_date(cell: &str, row_number: usize, report: &mut BuildReport) -> Option<ScheduleDate> {
    match ScheduleDate::parse(cell.trim()) {
        Ok(date) => Some(date),
        Err(_) => {
            debug!(row = row_number, value = cell, "skipping row with invalid date");
            report.skipped_invalid_date += 1;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    fn date(value: &str) -> ScheduleDate {
        ScheduleDate::parse(value).unwrap()
    }

    #[test]
    fn test_long_layout_basic() {
        let input = rows(&[
            &["date", "surgeon", "anesth"],
            &["01/02/2024", "Dr. X", "Dr. Y"],
        ]);
        let (schedule, report) = build_schedule(&input, Layout::Long);
        assert_eq!(
            schedule.index.day(&date("01/02/2024")).unwrap().get("Dr. X"),
            Some("Dr. Y")
        );
        assert!(schedule.surgeons.contains("Dr. X"));
        assert_eq!(report.assignments, 1);
        assert_eq!(report.data_rows, 1);
    }

    #[test]
    fn test_long_layout_skips_bad_rows() {
        let input = rows(&[
            &["date", "surgeon", "anesth"],
            &["2024-02-01", "Dr. X", "Dr. Y"],
            &["01/02/2024", "Dr. X"],
            &["02/02/2024", "", "Dr. Y"],
            &["03/02/2024", "Dr. Z", "Dr. W", "extra"],
        ]);
        let (schedule, report) = build_schedule(&input, Layout::Long);
        assert_eq!(report.skipped_invalid_date, 1);
        assert_eq!(report.skipped_short, 1);
        assert_eq!(report.assignments, 1);
        // The date with an incomplete assignment is still known.
        assert!(schedule.index.contains_date(&date("02/02/2024")));
        assert!(!schedule.index.contains_date(&date("01/02/2024")));
        assert_eq!(schedule.surgeons.len(), 1);
    }

    #[test]
    fn test_long_layout_last_write_wins() {
        let input = rows(&[
            &["date", "surgeon", "anesth"],
            &["01/02/2024", "Dr. X", "Dr. First"],
            &["01/02/2024", "Dr. X", "Dr. Second"],
        ]);
        let (schedule, _) = build_schedule(&input, Layout::Long);
        let day = schedule.index.day(&date("01/02/2024")).unwrap();
        assert_eq!(day.get("Dr. X"), Some("Dr. Second"));
        assert_eq!(day.len(), 1);
    }

    #[test]
    fn test_insufficient_rows() {
        let (schedule, report) = build_schedule(&[], Layout::Long);
        assert!(schedule.is_empty());
        assert!(report.insufficient_rows);

        let header_only = rows(&[&["date", "surgeon", "anesth"]]);
        let (schedule, report) = build_schedule(&header_only, Layout::Wide);
        assert!(schedule.is_empty());
        assert!(report.insufficient_rows);
    }

    #[test]
    fn test_wide_layout() {
        let input = rows(&[
            &["Jour", "Date", "Dr. Cuche", "Dr. Mariat", "Notes"],
            &["Lundi", "05/02/2024", "Dr. Surgeon A", "Dr Surgeon B", "Dr. Ignored"],
            &["Mardi", "06/02/2024", "", "Dr. Surgeon A"],
            &["Mercredi", "pas de date", "Dr. Surgeon C"],
            &["Jeudi"],
        ]);
        let (schedule, report) = build_schedule(&input, Layout::Wide);

        let monday = schedule.index.day(&date("05/02/2024")).unwrap();
        assert_eq!(monday.get("Dr. Surgeon A"), Some("Dr. Cuche"));
        assert_eq!(monday.get("Dr Surgeon B"), Some("Dr. Mariat"));
        assert_eq!(monday.get("Dr. Ignored"), None);

        let tuesday = schedule.index.day(&date("06/02/2024")).unwrap();
        assert_eq!(tuesday.get("Dr. Surgeon A"), Some("Dr. Mariat"));

        assert_eq!(report.assignments, 3);
        assert_eq!(report.skipped_invalid_date, 1);
        assert_eq!(report.skipped_short, 1);
        assert_eq!(schedule.surgeons.len(), 2);
    }

    #[test]
    fn test_wide_layout_requires_doctor_cells() {
        let input = rows(&[
            &["Jour", "Date", "Dr. Cuche"],
            &["Lundi", "05/02/2024", "Congrès"],
        ]);
        let (schedule, report) = build_schedule(&input, Layout::Wide);
        assert_eq!(report.assignments, 0);
        assert!(schedule.index.day(&date("05/02/2024")).unwrap().is_empty());
        assert!(schedule.surgeons.is_empty());
    }

    #[test]
    fn test_wide_header_columns_before_two_ignored() {
        let input = rows(&[
            &["Dr. Day", "Dr. Date", "Dr. Cuche"],
            &["Lundi", "05/02/2024", "Dr. A"],
        ]);
        let (schedule, _) = build_schedule(&input, Layout::Wide);
        let day = schedule.index.day(&date("05/02/2024")).unwrap();
        assert_eq!(day.iter().collect::<Vec<_>>(), vec![("Dr. A", "Dr. Cuche")]);
    }
}
