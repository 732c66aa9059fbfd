//! Integration tests for goal calculation with a temperature source

mod common;

use std::sync::Arc;
use std::time::Duration;

use smartsip::hydration::{compute_goal, Progress};
use smartsip::weather::{
    fetch_temperature, FixedTemperature, NoTemperature, TemperatureProvider, TemperatureReading,
};
use smartsip::{UnitSystem, VolumeUnit};

use common::metric_profile;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

#[tokio::test]
async fn test_hot_day_metric_goal() {
    let profile = metric_profile();
    let provider: Arc<dyn TemperatureProvider> = Arc::new(FixedTemperature(30.0));
    let reading = fetch_temperature(provider, Duration::from_secs(1)).await;
    assert_eq!(reading.celsius(), Some(30.0));

    let goal = compute_goal(profile.unit, profile.weight, reading.celsius(), 45);

    assert_eq!(goal.unit, VolumeUnit::Liters);
    assert!(approx(goal.base, 2.2819));
    assert!(approx(goal.temperature, goal.base * 0.5));
    assert!(approx(goal.activity, 12.0 * 0.0295735));
    assert!(approx(goal.daily_goal, 3.7778));
}

#[tokio::test]
async fn test_missing_temperature_skips_heat_bonus() {
    let provider: Arc<dyn TemperatureProvider> = Arc::new(NoTemperature);
    let reading = fetch_temperature(provider, Duration::from_secs(1)).await;
    assert!(matches!(reading, TemperatureReading::Unavailable { .. }));

    let goal = compute_goal(UnitSystem::Imperial, 160.0, reading.celsius(), 60);
    assert_eq!(goal.base, 80.0);
    assert_eq!(goal.temperature, 0.0);
    assert_eq!(goal.activity, 24.0);
    assert_eq!(goal.daily_goal, 104.0);
    assert!(!goal.temperature_known);
}

#[test]
fn test_goal_components_sum_for_many_profiles() {
    for unit in [UnitSystem::Metric, UnitSystem::Imperial] {
        for weight in [40.0, 72.5, 150.0, 300.0] {
            for temp in [None, Some(-5.0), Some(25.0), Some(25.1), Some(41.0)] {
                for minutes in [0, 29, 30, 95, 240] {
                    let goal = compute_goal(unit, weight, temp, minutes);
                    assert_eq!(goal.daily_goal, goal.base + goal.temperature + goal.activity);
                    assert!(goal.daily_goal >= goal.base);
                }
            }
        }
    }
}

#[test]
fn test_threshold_is_strictly_greater_than_25() {
    let at_threshold = compute_goal(UnitSystem::Imperial, 100.0, Some(25.0), 0);
    let above = compute_goal(UnitSystem::Imperial, 100.0, Some(25.01), 0);
    assert_eq!(at_threshold.daily_goal, 50.0);
    assert_eq!(above.daily_goal, 75.0);
}

#[test]
fn test_progress_against_goal() {
    let goal = compute_goal(UnitSystem::Imperial, 160.0, None, 0);
    let progress = Progress::new(100.0, goal.daily_goal);
    assert!(progress.is_complete());
    assert_eq!(progress.remaining, 0.0);
}
