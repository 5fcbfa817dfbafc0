//! Tests for anesth-model types.

use anesth_model::{
    Assignment, AssignmentSource, LookupMiss, LookupOutcome, Schedule, ScheduleDate,
    ScheduleIndex, SurgeonSet,
};

fn date(value: &str) -> ScheduleDate {
    ScheduleDate::parse(value).expect("valid date")
}

#[test]
fn outcome_found_serializes() {
    let outcome = LookupOutcome::Found(Assignment::exact("Dr. Cuche"));
    let json = serde_json::to_value(&outcome).expect("serialize outcome");
    assert_eq!(json["status"], "found");
    assert_eq!(json["detail"]["anesthesiologist"], "Dr. Cuche");
    assert_eq!(json["detail"]["source"]["kind"], "exact");
}

#[test]
fn outcome_not_found_serializes_date_in_french_form() {
    let outcome = LookupOutcome::NotFound(LookupMiss::SurgeonNotFound {
        date: date("03/04/2024"),
        surgeon: "Dr. X".to_string(),
    });
    let json = serde_json::to_value(&outcome).expect("serialize outcome");
    assert_eq!(json["status"], "not_found");
    assert_eq!(json["detail"]["reason"], "surgeon_not_found");
    assert_eq!(json["detail"]["date"], "03/04/2024");
    assert_eq!(json["detail"]["surgeon"], "Dr. X");
}

#[test]
fn random_fallback_is_flagged() {
    let assignment = Assignment {
        anesthesiologist: "Dr. Petit".to_string(),
        source: AssignmentSource::RandomFallback {
            miss: LookupMiss::DateNotFound {
                date: date("01/01/2030"),
            },
        },
    };
    assert!(assignment.is_random());
    assert!(!Assignment::exact("Dr. Petit").is_random());
}

#[test]
fn miss_display_names_what_is_missing() {
    let miss = LookupMiss::DateNotFound {
        date: date("01/01/2030"),
    };
    assert_eq!(miss.to_string(), "no schedule for 01/01/2030");
    assert_eq!(miss.date(), &date("01/01/2030"));
}

#[test]
fn schedule_serializes_index_by_date() {
    let mut index = ScheduleIndex::new();
    index.record(date("02/02/2024"), "Dr. B", "Dr. Two");
    index.record(date("01/02/2024"), "Dr. A", "Dr. One");
    let surgeons: SurgeonSet = ["Dr. A", "Dr. B"].into_iter().collect();
    let schedule = Schedule::new(index, surgeons);

    let json = serde_json::to_string(&schedule).expect("serialize schedule");
    assert_eq!(
        json,
        r#"{"index":{"01/02/2024":{"Dr. A":"Dr. One"},"02/02/2024":{"Dr. B":"Dr. Two"}},"surgeons":["Dr. A","Dr. B"]}"#
    );
}
