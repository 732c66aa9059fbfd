//! Status command implementation

use anyhow::Result;
use chrono::{Local, Timelike};

use smartsip::hydration::{greeting_for_hour, Progress};
use smartsip::stats::Achievement;
use smartsip::VolumeUnit;

use super::trophies::refresh_trophies;
use super::{print_goal, today, AppContext};

/// Print total, remaining, a progress bar and the plant stage
pub fn print_progress(progress: &Progress, unit: VolumeUnit) {
    const WIDTH: usize = 30;
    let filled = (progress.fraction * WIDTH as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled.min(WIDTH)));

    println!("Total intake: {:.2} {}", progress.total, unit.short());
    println!("Remaining:    {:.2} {}", progress.remaining, unit.short());
    println!("[{}] {}%", bar, progress.percent());
    println!(
        "{} You are currently in the {} stage.",
        progress.stage.icon(),
        progress.stage.label()
    );
}

/// Today's dashboard
pub async fn status_command(ctx: &AppContext, temp: Option<f64>) -> Result<()> {
    let Some(mut profile) = ctx.store.load_profile() else {
        println!("No profile found. Please set up your profile first:");
        println!("  smartsip profile set --unit kg --weight 70 --wake 07:00 --bed 23:00");
        return Ok(());
    };

    let today = today();
    let (goal, reading) = ctx.resolve_goal(&profile, temp).await;

    let mut session = ctx.store.open_session(today, goal.unit)?;
    if session.goal() != Some(goal.daily_goal) {
        session.set_goal(goal.daily_goal);
        ctx.store.save_session(&session)?;
    }

    println!("👤 {}, welcome back!", profile.name);
    println!("{}\n", greeting_for_hour(Local::now().hour()));

    print_goal(&goal, &reading, profile.activity_minutes);
    println!();
    print_progress(&Progress::new(session.total(), goal.daily_goal), goal.unit);

    let ledger = ctx.store.load_ledger();
    let report = refresh_trophies(ctx, &mut profile, &ledger, &goal, today)?;

    println!();
    println!(
        "🔥 Streak: {} day(s) (best {})",
        report.current_streak, report.max_streak
    );
    if let Some(next) = Achievement::next_for_streak(report.max_streak) {
        println!("   Next trophy: {} {}", next.icon, next.name);
    }

    Ok(())
}

/// Zero today's running total
pub async fn reset_today_command(ctx: &AppContext) -> Result<()> {
    let unit = ctx
        .store
        .load_profile()
        .map(|p| p.unit.volume_unit())
        .unwrap_or_default();

    let mut session = ctx.store.open_session(today(), unit)?;
    session.reset();
    ctx.store.save_session(&session)?;

    tracing::info!("Reset today's intake");
    println!("Today's intake reset!");
    Ok(())
}
