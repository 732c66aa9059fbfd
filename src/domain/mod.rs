//! Core domain types for SmartSip

mod intake;
mod profile;
mod unit;
mod validation;

pub use intake::{DailyTotal, IntakeEvent};
pub use profile::{
    parse_time_of_day, sleep_duration_hours, Profile, MAX_SLEEP_HOURS, MIN_SLEEP_HOURS,
};
pub use unit::{UnitSystem, VolumeUnit, LITERS_PER_OUNCE, POUNDS_PER_KG};
pub use validation::ValidationError;
