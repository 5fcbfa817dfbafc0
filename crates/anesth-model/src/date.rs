//! Schedule dates in the French `DD/MM/YYYY` form used by the published schedule.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{ModelError, Result};

/// A calendar date as it appears in the schedule.
///
/// Only the textual shape is checked; `31/02/2024` is accepted because the
/// schedule is keyed by text and the source never validates the calendar.
/// Fields are declared year first so the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleDate {
    year: u16,
    month: u8,
    day: u8,
}

impl ScheduleDate {
    /// Parses a `DD/MM/YYYY` value. Anything else, including surrounding
    /// whitespace, is rejected.
    pub fn parse(value: &str) -> Result<Self> {
        let bytes = value.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[2] == b'/'
            && bytes[5] == b'/'
            && [0, 1, 3, 4, 6, 7, 8, 9]
                .iter()
                .all(|&idx| bytes[idx].is_ascii_digit());
        if !shape_ok {
            return Err(ModelError::InvalidDate(value.to_string()));
        }
        Ok(Self {
            day: digits(&bytes[0..2]) as u8,
            month: digits(&bytes[3..5]) as u8,
            year: digits(&bytes[6..10]) as u16,
        })
    }

    /// Converts the `YYYY-MM-DD` form produced by date pickers.
    ///
    /// The fields are reordered without interpretation, then the French
    /// shape is enforced on the result.
    pub fn from_iso(value: &str) -> Result<Self> {
        let mut parts = value.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ModelError::InvalidIsoDate(value.to_string()));
        };
        Self::parse(&format!("{day}/{month}/{year}"))
            .map_err(|_| ModelError::InvalidIsoDate(value.to_string()))
    }

    /// Returns true when `value` has the `DD/MM/YYYY` shape.
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// Renders the `YYYY-MM-DD` form.
    pub fn to_iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

impl fmt::Display for ScheduleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for ScheduleDate {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for ScheduleDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_french_date() {
        let date = ScheduleDate::parse("01/02/2024").unwrap();
        assert_eq!(date.day(), 1);
        assert_eq!(date.month(), 2);
        assert_eq!(date.year(), 2024);
        assert_eq!(date.to_string(), "01/02/2024");
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(ScheduleDate::parse("1/02/2024").is_err());
        assert!(ScheduleDate::parse("01-02-2024").is_err());
        assert!(ScheduleDate::parse("2024-02-01").is_err());
        assert!(ScheduleDate::parse(" 01/02/2024").is_err());
        assert!(ScheduleDate::parse("01/02/24").is_err());
        assert!(ScheduleDate::parse("ab/cd/efgh").is_err());
        assert!(ScheduleDate::parse("").is_err());
    }

    #[test]
    fn test_shape_only_no_calendar_check() {
        assert!(ScheduleDate::is_valid("31/02/2024"));
    }

    #[test]
    fn test_from_iso_reorders_fields() {
        let date = ScheduleDate::from_iso("2024-02-01").unwrap();
        assert_eq!(date, ScheduleDate::parse("01/02/2024").unwrap());
        assert_eq!(date.to_iso(), "2024-02-01");
    }

    #[test]
    fn test_from_iso_rejects_garbage() {
        assert_eq!(
            ScheduleDate::from_iso("01/02/2024"),
            Err(ModelError::InvalidIsoDate("01/02/2024".to_string()))
        );
        assert!(ScheduleDate::from_iso("2024-2-1").is_err());
        assert!(ScheduleDate::from_iso("2024-02-01-07").is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut dates = vec![
            ScheduleDate::parse("15/01/2025").unwrap(),
            ScheduleDate::parse("02/03/2024").unwrap(),
            ScheduleDate::parse("01/12/2024").unwrap(),
        ];
        dates.sort();
        let rendered: Vec<String> = dates.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["02/03/2024", "01/12/2024", "15/01/2025"]);
    }
}
