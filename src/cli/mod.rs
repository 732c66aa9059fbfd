//! CLI command implementations

pub mod goal;
pub mod history;
pub mod init;
pub mod log;
pub mod profile;
pub mod status;
pub mod trophies;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};

use smartsip::config::Config;
use smartsip::hydration::{compute_goal, GoalBreakdown};
use smartsip::store::Store;
use smartsip::weather::{
    fetch_temperature, FixedTemperature, TemperatureProvider, TemperatureReading,
};
use smartsip::Profile;

/// Config and data directory shared by all commands
pub struct AppContext {
    pub config: Config,
    pub store: Store,
}

impl AppContext {
    pub fn load(config_path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config = Config::load(config_path)?;
        let dir = data_dir.unwrap_or_else(|| config.data_dir());
        tracing::debug!("Using data directory {}", dir.display());

        Ok(Self {
            config,
            store: Store::new(dir),
        })
    }

    /// The stored profile, or an error telling the user to create one
    pub fn require_profile(&self) -> Result<Profile> {
        match self.store.load_profile() {
            Some(profile) => Ok(profile),
            None => bail!(
                "No profile found. Set one up first, e.g. `smartsip profile set --unit kg --weight 70`"
            ),
        }
    }

    /// Today's goal for `profile`.
    ///
    /// `temp_override` skips the weather lookup.
    pub async fn resolve_goal(
        &self,
        profile: &Profile,
        temp_override: Option<f64>,
    ) -> (GoalBreakdown, TemperatureReading) {
        let provider: Arc<dyn TemperatureProvider> = match temp_override {
            Some(t) => Arc::new(FixedTemperature(t)),
            None => self.config.temperature_provider(),
        };

        let reading = fetch_temperature(provider, self.config.weather_timeout()).await;
        let goal = compute_goal(
            profile.unit,
            profile.weight,
            reading.celsius(),
            profile.activity_minutes,
        );

        (goal, reading)
    }
}

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Print the goal with its parts
pub fn print_goal(goal: &GoalBreakdown, reading: &TemperatureReading, activity_minutes: u32) {
    let unit = goal.unit.short();
    println!("💧 Daily goal: {:.2} {}", goal.daily_goal, unit);
    println!("   Base:        {:.2} {}", goal.base, unit);
    println!("   Temperature: {:.2} {}", goal.temperature, unit);
    println!(
        "   Activity:    {:.2} {} ({} min physical activity)",
        goal.activity, unit, activity_minutes
    );

    match reading {
        TemperatureReading::Known(t) => {
            println!("🌡️  Current temperature: {:.1}°C", t);
            if goal.temperature > 0.0 {
                println!("   Temperature above 25°C - goal increased by 50%");
            }
        }
        TemperatureReading::Unavailable { .. } => {
            println!("⚠️  Temperature data unavailable.");
        }
    }
}
