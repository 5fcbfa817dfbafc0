//! Schedule index: date → surgeon → anesthesiologist.

use std::collections::{BTreeMap, BTreeSet};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::date::ScheduleDate;
use crate::name::{display_sort_key, names_equivalent};

/// Assignments for one day, in the order surgeons first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    entries: Vec<(String, String)>,
}

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an assignment. A surgeon already present keeps its position
    /// and takes the new anesthesiologist; the previous value is returned.
    pub fn insert(
        &mut self,
        surgeon: impl Into<String>,
        anesthesiologist: impl Into<String>,
    ) -> Option<String> {
        let surgeon = surgeon.into();
        let anesthesiologist = anesthesiologist.into();
        match self.entries.iter_mut().find(|(key, _)| *key == surgeon) {
            Some((_, value)) => Some(std::mem::replace(value, anesthesiologist)),
            None => {
                self.entries.push((surgeon, anesthesiologist));
                None
            }
        }
    }

    /// Exact key lookup.
    pub fn get(&self, surgeon: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == surgeon)
            .map(|(_, value)| value.as_str())
    }

    /// First entry whose surgeon is name-equivalent to `surgeon`.
    pub fn find_equivalent(&self, surgeon: &str) -> Option<(&str, &str)> {
        self.iter()
            .find(|(key, _)| names_equivalent(key, surgeon))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(surgeon, anesth)| (surgeon.as_str(), anesth.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for DaySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (surgeon, anesth) in &self.entries {
            map.serialize_entry(surgeon, anesth)?;
        }
        map.end()
    }
}

/// Per-date assignments. Rebuilt wholesale on every load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScheduleIndex {
    days: BTreeMap<ScheduleDate, DaySchedule>,
}

impl ScheduleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `date` without assignments if it is not present yet.
    pub fn ensure_date(&mut self, date: ScheduleDate) -> &mut DaySchedule {
        self.days.entry(date).or_default()
    }

    /// Records `surgeon → anesthesiologist` on `date`; later calls win.
    pub fn record(
        &mut self,
        date: ScheduleDate,
        surgeon: impl Into<String>,
        anesthesiologist: impl Into<String>,
    ) -> Option<String> {
        self.ensure_date(date).insert(surgeon, anesthesiologist)
    }

    pub fn day(&self, date: &ScheduleDate) -> Option<&DaySchedule> {
        self.days.get(date)
    }

    pub fn contains_date(&self, date: &ScheduleDate) -> bool {
        self.days.contains_key(date)
    }

    /// Dates in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (&ScheduleDate, &DaySchedule)> {
        self.days.iter()
    }

    pub fn date_count(&self) -> usize {
        self.days.len()
    }

    pub fn assignment_count(&self) -> usize {
        self.days.values().map(DaySchedule::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Distinct surgeons seen while building the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SurgeonSet {
    names: BTreeSet<String>,
}

impl SurgeonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Selector order: alphabetical on the name without its honorific,
    /// case- and accent-insensitive. Exact ties fall back to the raw name.
    pub fn sorted_for_display(&self) -> Vec<&str> {
        let mut keyed: Vec<(String, &str)> = self
            .names
            .iter()
            .map(|name| (display_sort_key(name), name.as_str()))
            .collect();
        keyed.sort();
        keyed.into_iter().map(|(_, name)| name).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SurgeonSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A loaded schedule: the index plus the surgeons that populate the selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub index: ScheduleIndex,
    pub surgeons: SurgeonSet,
}

impl Schedule {
    pub fn new(index: ScheduleIndex, surgeons: SurgeonSet) -> Self {
        Self { index, surgeons }
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn into_parts(self) -> (ScheduleIndex, SurgeonSet) {
        (self.index, self.surgeons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> ScheduleDate {
        ScheduleDate::parse(value).unwrap()
    }

    #[test]
    fn test_day_schedule_last_write_wins_in_place() {
        let mut day = DaySchedule::new();
        assert_eq!(day.insert("Dr. A", "Dr. One"), None);
        day.insert("Dr. B", "Dr. Two");
        assert_eq!(day.insert("Dr. A", "Dr. Three"), Some("Dr. One".to_string()));

        let entries: Vec<_> = day.iter().collect();
        assert_eq!(entries, vec![("Dr. A", "Dr. Three"), ("Dr. B", "Dr. Two")]);
    }

    #[test]
    fn test_find_equivalent_returns_first_in_insertion_order() {
        let mut day = DaySchedule::new();
        day.insert("Dr X", "Dr. First");
        day.insert("Dr.X", "Dr. Second");
        assert_eq!(day.find_equivalent("Dr. X"), Some(("Dr X", "Dr. First")));
        assert_eq!(day.find_equivalent("Dr. Y"), None);
    }

    #[test]
    fn test_index_counts() {
        let mut index = ScheduleIndex::new();
        index.record(date("01/02/2024"), "Dr. A", "Dr. One");
        index.record(date("01/02/2024"), "Dr. B", "Dr. Two");
        index.ensure_date(date("02/02/2024"));
        assert_eq!(index.date_count(), 2);
        assert_eq!(index.assignment_count(), 2);
        assert!(index.contains_date(&date("02/02/2024")));
        assert!(index.day(&date("02/02/2024")).unwrap().is_empty());
    }

    #[test]
    fn test_sorted_for_display_ignores_title_and_accents() {
        let set: SurgeonSet = ["Dr. Zola", "Dr Émile", "dr.bernard", "Dr. Caron"]
            .into_iter()
            .collect();
        assert_eq!(
            set.sorted_for_display(),
            vec!["dr.bernard", "Dr. Caron", "Dr Émile", "Dr. Zola"]
        );
    }
}
