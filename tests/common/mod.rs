//! Shared test utilities for hydration integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tempfile::TempDir;

use smartsip::store::Store;
use smartsip::{IntakeEvent, Profile, UnitSystem, VolumeUnit};

/// Creates a store backed by a fresh temporary directory
pub fn create_test_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Store::new(temp_dir.path());
    (temp_dir, store)
}

/// A valid metric profile: 70 kg, 07:00-23:00, no activity
pub fn metric_profile() -> Profile {
    Profile::new(
        UnitSystem::Metric,
        70.0,
        NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
        "Tester",
        0,
    )
    .expect("Failed to build profile")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).expect("valid time")
}

/// One event of `amount` liters at noon on each of `days` consecutive days
pub fn daily_events(start: NaiveDate, days: u64, amount: f64) -> Vec<IntakeEvent> {
    (0..days)
        .map(|offset| {
            let day = start + chrono::Days::new(offset);
            IntakeEvent::new(at(day, 12, 0), amount, VolumeUnit::Liters)
        })
        .collect()
}
