//! Goal command implementation

use anyhow::Result;

use super::{print_goal, AppContext};

/// Show today's goal and its components
pub async fn goal_command(ctx: &AppContext, temp: Option<f64>) -> Result<()> {
    let profile = ctx.require_profile()?;
    let (goal, reading) = ctx.resolve_goal(&profile, temp).await;
    print_goal(&goal, &reading, profile.activity_minutes);
    Ok(())
}
