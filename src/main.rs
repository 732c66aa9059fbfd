use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::profile::ProfileArgs;

#[derive(Parser)]
#[command(name = "smartsip")]
#[command(about = "SmartSip - hydration tracker with adaptive daily goals and streak trophies")]
#[command(version)]
struct Cli {
    /// Directory for profile, intake log and history (defaults to ~/.smartsip)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.smartsip/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a commented default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommand>,
    },

    /// Show today's goal and how it is made up
    Goal {
        /// Use this temperature (°C) instead of looking it up
        #[arg(long, allow_hyphen_values = true)]
        temp: Option<f64>,
    },

    /// Log a drink
    Log {
        /// Amount in the profile's unit (liters or oz)
        amount: Option<f64>,

        /// Log a preset instead: half-cup, cup, half-bottle, bottle
        #[arg(short, long, conflicts_with = "amount")]
        preset: Option<String>,

        /// Use this temperature (°C) instead of looking it up
        #[arg(long, allow_hyphen_values = true)]
        temp: Option<f64>,
    },

    /// List the drink presets
    Presets,

    /// Today's progress, streak and plant
    Status {
        /// Use this temperature (°C) instead of looking it up
        #[arg(long, allow_hyphen_values = true)]
        temp: Option<f64>,
    },

    /// Daily totals for the last days
    History {
        /// Number of days to show
        #[arg(long, default_value_t = 7)]
        days: usize,
    },

    /// Show earned and locked trophies
    Trophies,

    /// Set today's running total back to zero (the log is kept)
    ResetToday,
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Print the stored profile
    Show,
    /// Create or update the profile
    Set(ProfileArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config;
    let data_dir = cli.data_dir;
    let load_ctx = || cli::AppContext::load(config_path.as_deref(), data_dir.clone());

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path.as_deref(), force).await?;
        }
        Some(Commands::Profile { command }) => {
            let ctx = load_ctx()?;
            match command {
                Some(ProfileCommand::Set(args)) => cli::profile::set_command(&ctx, args).await?,
                Some(ProfileCommand::Show) | None => cli::profile::show_command(&ctx).await?,
            }
        }
        Some(Commands::Goal { temp }) => {
            cli::goal::goal_command(&load_ctx()?, temp).await?;
        }
        Some(Commands::Log {
            amount,
            preset,
            temp,
        }) => {
            cli::log::log_command(&load_ctx()?, amount, preset, temp).await?;
        }
        Some(Commands::Presets) => {
            cli::log::presets_command(&load_ctx()?).await?;
        }
        Some(Commands::Status { temp }) => {
            cli::status::status_command(&load_ctx()?, temp).await?;
        }
        Some(Commands::History { days }) => {
            cli::history::history_command(&load_ctx()?, days).await?;
        }
        Some(Commands::Trophies) => {
            cli::trophies::trophies_command(&load_ctx()?).await?;
        }
        Some(Commands::ResetToday) => {
            cli::status::reset_today_command(&load_ctx()?).await?;
        }
        None => {
            // Default: show the dashboard
            cli::status::status_command(&load_ctx()?, None).await?;
        }
    }

    Ok(())
}
