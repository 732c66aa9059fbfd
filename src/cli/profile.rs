//! Profile commands

use anyhow::{anyhow, Result};
use chrono::NaiveTime;
use clap::Args;

use smartsip::domain::parse_time_of_day;
use smartsip::{Profile, UnitSystem};

use super::{print_goal, AppContext};

/// Fields to set; anything left out keeps its stored (or default) value
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Weight unit: kg or lbs
    #[arg(long)]
    pub unit: Option<UnitSystem>,

    /// Body weight in the chosen unit
    #[arg(long)]
    pub weight: Option<f64>,

    /// Wake-up time, HH:MM
    #[arg(long, value_parser = parse_time)]
    pub wake: Option<NaiveTime>,

    /// Bed time, HH:MM
    #[arg(long, value_parser = parse_time)]
    pub bed: Option<NaiveTime>,

    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Physical activity in minutes per day
    #[arg(long)]
    pub activity: Option<u32>,
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    parse_time_of_day(s).map_err(|e| e.to_string())
}

/// Apply `args` on top of `base`. Earned trophies are carried over untouched.
pub fn apply_args(base: Option<Profile>, args: ProfileArgs) -> Result<Profile> {
    let (unit, weight, wake, bed, name, activity, achievements) = match base {
        Some(p) => (
            p.unit,
            p.weight,
            p.wake_time,
            p.sleep_time,
            p.name,
            p.activity_minutes,
            p.achievements,
        ),
        None => {
            let unit = args.unit.unwrap_or_default();
            let weight = match unit {
                UnitSystem::Metric => 70.0,
                UnitSystem::Imperial => 150.0,
            };
            (
                unit,
                weight,
                NaiveTime::from_hms_opt(7, 0, 0).ok_or_else(|| anyhow!("invalid default time"))?,
                NaiveTime::from_hms_opt(23, 0, 0).ok_or_else(|| anyhow!("invalid default time"))?,
                "User".to_string(),
                0,
                Default::default(),
            )
        }
    };

    let mut profile = Profile::new(
        args.unit.unwrap_or(unit),
        args.weight.unwrap_or(weight),
        args.wake.unwrap_or(wake),
        args.bed.unwrap_or(bed),
        args.name.unwrap_or(name),
        args.activity.unwrap_or(activity),
    )?;
    profile.achievements = achievements;
    Ok(profile)
}

/// Create or update the profile
pub async fn set_command(ctx: &AppContext, args: ProfileArgs) -> Result<()> {
    let existing = ctx.store.load_profile();
    let profile = apply_args(existing, args)?;

    ctx.store.save_profile(&profile)?;
    tracing::info!("Profile saved for {}", profile.name);

    println!("Profile saved!");
    println!(
        "🛏️  Estimated sleep duration: {:.1} hours",
        profile.sleep_hours()
    );

    let (goal, reading) = ctx.resolve_goal(&profile, None).await;
    println!();
    print_goal(&goal, &reading, profile.activity_minutes);
    Ok(())
}

/// Print the stored profile
pub async fn show_command(ctx: &AppContext) -> Result<()> {
    let profile = ctx.require_profile()?;

    println!("👤 {}", profile.name);
    println!("   Weight:   {:.1} {}", profile.weight, profile.unit);
    println!(
        "   Wake up:  {} | Bed time: {} ({:.1} h sleep)",
        profile.wake_time.format("%H:%M"),
        profile.sleep_time.format("%H:%M"),
        profile.sleep_hours()
    );
    println!("   Activity: {} min/day", profile.activity_minutes);
    println!(
        "   Trophies: {}",
        if profile.achievements.is_empty() {
            "none yet".to_string()
        } else {
            profile
                .achievements
                .keys()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clap::Parser;

    #[derive(Parser)]
    struct ProfileCli {
        #[command(flatten)]
        args: ProfileArgs,
    }

    #[test]
    fn test_unit_flag_accepts_aliases() {
        let cli = ProfileCli::try_parse_from(["smartsip", "--unit", "LBS", "--wake", "06:30"])
            .unwrap();
        assert_eq!(cli.args.unit, Some(UnitSystem::Imperial));
        assert_eq!(cli.args.wake, NaiveTime::from_hms_opt(6, 30, 0));

        assert!(ProfileCli::try_parse_from(["smartsip", "--unit", "stone"]).is_err());
    }

    #[test]
    fn test_new_profile_gets_unit_defaults() {
        let args = ProfileArgs {
            unit: Some(UnitSystem::Imperial),
            ..Default::default()
        };
        let profile = apply_args(None, args).unwrap();
        assert_eq!(profile.weight, 150.0);
        assert_eq!(profile.name, "User");
    }

    #[test]
    fn test_update_keeps_trophies() {
        let mut base = apply_args(None, ProfileArgs::default()).unwrap();
        let earned = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        base.achievements.insert("weekly".to_string(), earned);

        let args = ProfileArgs {
            weight: Some(82.0),
            ..Default::default()
        };
        let updated = apply_args(Some(base), args).unwrap();
        assert_eq!(updated.weight, 82.0);
        assert_eq!(updated.achievements.get("weekly"), Some(&earned));
    }

    #[test]
    fn test_invalid_update_is_rejected() {
        let args = ProfileArgs {
            weight: Some(0.0),
            ..Default::default()
        };
        assert!(apply_args(None, args).is_err());
    }
}
