//! Log command implementation

use anyhow::{anyhow, bail, Result};
use chrono::Local;

use smartsip::hydration::{DrinkPreset, Progress, DRINK_PRESETS};
use smartsip::IntakeEvent;

use super::status::print_progress;
use super::trophies::refresh_trophies;
use super::AppContext;

/// Log a drink, update today's session and check for new trophies
pub async fn log_command(
    ctx: &AppContext,
    amount: Option<f64>,
    preset: Option<String>,
    temp: Option<f64>,
) -> Result<()> {
    let mut profile = ctx.require_profile()?;

    let amount = match (amount, preset) {
        (Some(amount), _) => amount,
        (None, Some(name)) => DrinkPreset::find(&name)
            .ok_or_else(|| anyhow!("Unknown preset '{}'. Run `smartsip presets`.", name))?
            .amount_for(profile.unit),
        (None, None) => bail!("Give an amount or a --preset"),
    };

    let (goal, _) = ctx.resolve_goal(&profile, temp).await;
    let now = Local::now().naive_local();
    let today = now.date();

    // Validate against the ledger before anything touches disk
    let mut ledger = ctx.store.load_ledger();
    let event = IntakeEvent::new(now, amount, goal.unit);
    ledger.append(event.clone())?;

    let mut session = ctx.store.open_session(today, goal.unit)?;
    let reached = ctx
        .store
        .record_intake(&mut session, &event, goal.daily_goal)?;
    tracing::info!("Logged {:.2} {}", amount, goal.unit);

    println!(
        "Added {:.2} {} to your intake tracker!",
        amount,
        goal.unit.short()
    );
    println!();
    print_progress(&Progress::new(session.total(), goal.daily_goal), goal.unit);

    if reached {
        println!("🎉 Goal reached! Keep hydrating if needed.");
    }

    refresh_trophies(ctx, &mut profile, &ledger, &goal, today)?;
    Ok(())
}

/// List the drink presets in the profile's unit
pub async fn presets_command(ctx: &AppContext) -> Result<()> {
    let unit = ctx
        .store
        .load_profile()
        .map(|p| p.unit)
        .unwrap_or_default();

    for preset in DRINK_PRESETS {
        println!(
            "  {} {:<12} {:<12} {:.2} {}",
            preset.icon,
            preset.key,
            preset.name,
            preset.amount_for(unit),
            unit.volume_unit().short()
        );
    }
    Ok(())
}
