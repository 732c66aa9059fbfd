use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::unit::UnitSystem;
use super::validation::ValidationError;

/// Lower bound for [`sleep_duration_hours`]
pub const MIN_SLEEP_HOURS: f64 = 3.0;
/// Upper bound for [`sleep_duration_hours`]
pub const MAX_SLEEP_HOURS: f64 = 16.0;

/// The user's hydration profile.
///
/// Field names on disk are kept stable so older profile files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub unit: UnitSystem,

    /// Body weight in the profile's unit (kg or lbs)
    pub weight: f64,

    #[serde(rename = "wake_up_time", with = "hhmm")]
    pub wake_time: NaiveTime,

    #[serde(rename = "bed_time", with = "hhmm")]
    pub sleep_time: NaiveTime,

    #[serde(default = "default_name")]
    pub name: String,

    /// Daily physical activity in minutes
    #[serde(rename = "physical_activity_minutes", default)]
    pub activity_minutes: u32,

    /// Unlocked achievements: achievement id -> date earned
    #[serde(rename = "trophies", default)]
    pub achievements: BTreeMap<String, NaiveDate>,
}

fn default_name() -> String {
    "User".to_string()
}

impl Profile {
    /// Build a validated profile with no achievements
    pub fn new(
        unit: UnitSystem,
        weight: f64,
        wake_time: NaiveTime,
        sleep_time: NaiveTime,
        name: impl Into<String>,
        activity_minutes: u32,
    ) -> Result<Self, ValidationError> {
        let profile = Self {
            unit,
            weight,
            wake_time,
            sleep_time,
            name: name.into(),
            activity_minutes,
            achievements: BTreeMap::new(),
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the profile invariants
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ValidationError::NonPositiveWeight(self.weight));
        }

        let hours = self.sleep_hours();
        if !(MIN_SLEEP_HOURS..=MAX_SLEEP_HOURS).contains(&hours) {
            return Err(ValidationError::SleepDurationOutOfRange {
                hours,
                min: MIN_SLEEP_HOURS,
                max: MAX_SLEEP_HOURS,
            });
        }

        Ok(())
    }

    /// The profile's sleep duration, see [`sleep_duration_hours`]
    pub fn sleep_hours(&self) -> f64 {
        sleep_duration_hours(self.wake_time, self.sleep_time)
    }
}

/// Hours from `wake_time` until the next `bed_time`, wrapping past midnight.
///
/// This is the figure shown as "sleep duration" and checked against
/// [`MIN_SLEEP_HOURS`]..=[`MAX_SLEEP_HOURS`]. A bed time at or before the wake
/// time falls on the next day, so identical times count as a full day.
pub fn sleep_duration_hours(wake_time: NaiveTime, bed_time: NaiveTime) -> f64 {
    let wake = wake_time.num_seconds_from_midnight() as i64;
    let bed = bed_time.num_seconds_from_midnight() as i64;
    let mut seconds = bed - wake;
    if seconds <= 0 {
        seconds += 24 * 3600;
    }
    seconds as f64 / 3600.0
}

/// Parse "HH:MM" (also accepts "HH:MM:SS")
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, ValidationError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime(s.to_string()))
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time_of_day(&raw).map_err(serde::de::Error::custom)
    }
}
