//! Trophy hall and trophy evaluation

use anyhow::Result;
use chrono::NaiveDate;

use smartsip::hydration::{GoalBreakdown, IntakeLedger};
use smartsip::stats::{Achievement, AchievementManager, AchievementReport, ACHIEVEMENTS};
use smartsip::Profile;

use super::{today, AppContext};

/// Evaluate streaks, merge new trophies into `profile` and save it if anything changed
pub fn refresh_trophies(
    ctx: &AppContext,
    profile: &mut Profile,
    ledger: &IntakeLedger,
    goal: &GoalBreakdown,
    today: NaiveDate,
) -> Result<AchievementReport> {
    let manager = AchievementManager::new(ctx.config.streak_evaluator());
    let report = manager.check(profile, ledger, goal.daily_goal, goal.unit, today);

    if report.has_unlocks() {
        ctx.store.save_profile(profile)?;
        for unlocked in &report.newly_unlocked {
            println!(
                "{} New trophy: {} - {}",
                unlocked.achievement.icon,
                unlocked.achievement.name,
                unlocked.achievement.description
            );
        }
    }

    Ok(report)
}

/// Show earned and locked trophies
pub async fn trophies_command(ctx: &AppContext) -> Result<()> {
    let mut profile = ctx.require_profile()?;
    let ledger = ctx.store.load_ledger();
    let (goal, _) = ctx.resolve_goal(&profile, None).await;
    let report = refresh_trophies(ctx, &mut profile, &ledger, &goal, today())?;

    println!("🏆 Achievement Hall\n");
    if profile.achievements.is_empty() {
        println!("No trophies earned yet. Stay hydrated to unlock achievements!\n");
    }

    for achievement in ACHIEVEMENTS {
        match profile.achievements.get(achievement.id.as_str()) {
            Some(date) => println!(
                "  {}  {:<18} earned on {}",
                achievement.icon, achievement.name, date
            ),
            None => println!(
                "  ·   {:<18} locked ({} day streak)",
                achievement.name, achievement.streak_threshold
            ),
        }
    }

    println!(
        "\nCurrent streak: {} day(s) | Best streak: {} day(s)",
        report.current_streak, report.max_streak
    );
    if let Some(next) = Achievement::next_for_streak(report.max_streak) {
        println!(
            "Next: {} in {} more day(s)",
            next.name,
            next.streak_threshold - report.max_streak
        );
    }

    Ok(())
}
