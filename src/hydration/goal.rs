//! Daily goal calculation
//!
//! The goal is built from three parts:
//! - base: half an ounce per pound of body weight
//! - temperature: +50% of base when it is hotter than 25°C
//! - activity: 12 oz for every full 30 minutes of exercise
//!
//! Metric profiles get the same rule converted to liters.

use crate::domain::{UnitSystem, VolumeUnit, LITERS_PER_OUNCE, POUNDS_PER_KG};

/// Temperatures above this trigger the heat bonus
pub const HOT_THRESHOLD_C: f64 = 25.0;
/// Share of the base goal added on hot days
pub const HEAT_BONUS_RATIO: f64 = 0.5;
/// Minutes of activity per bonus block
pub const ACTIVITY_BLOCK_MINUTES: u32 = 30;
/// Ounces added per activity block
pub const ACTIVITY_BLOCK_OUNCES: f64 = 12.0;

/// A computed daily goal with its components.
///
/// `daily_goal` is exactly `base + temperature + activity`; nothing is rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalBreakdown {
    pub daily_goal: f64,
    pub base: f64,
    pub temperature: f64,
    pub activity: f64,
    pub unit: VolumeUnit,
    /// False when no temperature was available and the heat bonus was skipped
    pub temperature_known: bool,
}

/// Compute the daily hydration goal.
///
/// A missing temperature means "no adjustment"; it never fails.
pub fn compute_goal(
    unit: UnitSystem,
    weight: f64,
    temperature_c: Option<f64>,
    activity_minutes: u32,
) -> GoalBreakdown {
    let blocks = activity_minutes / ACTIVITY_BLOCK_MINUTES;
    let activity_oz = blocks as f64 * ACTIVITY_BLOCK_OUNCES;

    let (base, activity) = match unit {
        UnitSystem::Imperial => (weight / 2.0, activity_oz),
        UnitSystem::Metric => (
            (weight * POUNDS_PER_KG / 2.0) * LITERS_PER_OUNCE,
            activity_oz * LITERS_PER_OUNCE,
        ),
    };

    let temperature = match temperature_c {
        Some(t) if t > HOT_THRESHOLD_C => base * HEAT_BONUS_RATIO,
        _ => 0.0,
    };

    GoalBreakdown {
        daily_goal: base + temperature + activity,
        base,
        temperature,
        activity,
        unit: unit.volume_unit(),
        temperature_known: temperature_c.is_some(),
    }
}
