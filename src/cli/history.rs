//! History command implementation

use anyhow::Result;

use super::AppContext;

/// Daily totals from the intake log plus archived day snapshots
pub async fn history_command(ctx: &AppContext, days: usize) -> Result<()> {
    if ctx.store.load_profile().is_none() {
        println!("Please set up your profile first to view history.");
        return Ok(());
    }

    let totals = ctx.store.load_ledger().daily_totals();
    if totals.is_empty() {
        println!("No intake history yet. Start logging your drinks!");
    } else {
        println!("Last {} day(s):", days);
        println!("  {:<12} {:>12}  Unit", "Date", "Total Intake");
        for total in totals.iter().rev().take(days) {
            println!(
                "  {:<12} {:>12.2}  {}",
                total.date.to_string(),
                total.amount,
                total.unit
            );
        }
    }

    let history = ctx.store.load_history();
    if !history.is_empty() {
        println!("\nArchived days:");
        for entry in history.iter().rev().take(days) {
            let goal = entry
                .goal
                .map(|g| format!(" (goal {:.2})", g))
                .unwrap_or_default();
            println!(
                "  {:<12} {:>12.2}  {}{}",
                entry.date.to_string(),
                entry.total_intake,
                entry.unit,
                goal
            );
        }
    }

    Ok(())
}
