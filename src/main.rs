mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::RunContext;
use config::{Overrides, Settings};
use days_core::CalendarDate;
use tracing_subscriber::EnvFilter;

/// Environment variable with the log filter (e.g. "debug", "days_core=warn")
const LOG_ENV: &str = "DAYS_LOG";

#[derive(Parser)]
#[command(name = "days")]
#[command(about = "Print today's date, your age in days and how far away your events are")]
struct Cli {
    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = CalendarDate::parse)]
    today: Option<CalendarDate>,

    /// Birthdate to use instead of BIRTHDATE or the config file (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = CalendarDate::parse)]
    birthdate: Option<CalendarDate>,

    /// Events file to read instead of the configured one
    #[arg(long, global = true)]
    events: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the date, birthday greeting and events (default)
    Show,
    /// Show the date and the birthday greeting
    Birthday,
    /// List events with how many days away they are
    Events {
        /// Print the events as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Create the events directory and an empty events file
    Init,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let overrides = Overrides {
        events_file: cli.events,
        birthdate: cli.birthdate,
    };
    let settings = Settings::resolve(config::load_config()?, overrides, |key| std::env::var(key).ok())?;

    let today = match cli.today {
        Some(today) => today,
        None => CalendarDate::today().context("Current date is out of range")?,
    };

    let ctx = RunContext { today, settings };

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => commands::show::run(&ctx),
        Commands::Birthday => commands::birthday::run(&ctx),
        Commands::Events { json } => commands::events::run(&ctx, json),
        Commands::Init => commands::init::run(&ctx.settings.events_file),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
