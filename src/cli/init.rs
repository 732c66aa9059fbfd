//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

use smartsip::config::Config;

/// Default configuration content for smartsip init
pub const DEFAULT_CONFIG: &str = r#"# SmartSip Configuration
# ======================

# ============================================================================
# WEATHER - temperature lookup for the hot-day bonus
# ============================================================================
#
# Above 25°C the daily goal grows by 50% of the base goal. Without a
# temperature (no key, offline, timeout) the goal is computed without it.
#
#   enabled      - Look up the temperature at all (default: true)
#   api_key      - weatherapi.com key; SMARTSIP_WEATHER_API_KEY overrides it
#   location     - Location query (default: "Lisbon,PT")
#   timeout_secs - Give up after this many seconds (default: 5)

[weather]
enabled = true
api_key = ""
location = "Lisbon,PT"
timeout_secs = 5

# ============================================================================
# STREAKS
# ============================================================================
#
#   missing_day_policy - "strict": a day with nothing logged breaks the streak
#                        "lenient": such days are skipped
#                        (default: "strict")

[streaks]
missing_day_policy = "strict"

# ============================================================================
# STORAGE
# ============================================================================
#
#   data_dir - Where profile, intake log and history live (default: ~/.smartsip)

[storage]
# data_dir = "/path/to/data"
"#;

/// Write the default config file
pub async fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;

    info!("Created {}", path.display());
    println!("Created {}", path.display());
    Ok(())
}
