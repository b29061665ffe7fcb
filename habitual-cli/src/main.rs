mod commands;
mod render;

use anyhow::Result;
use chrono::{NaiveDate, Utc, Weekday};
use clap::{Args, Parser, Subcommand};
use habitual_core::DayKey;
use habitual_core::config::PlannerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "habitual")]
#[command(about = "Plan your day and export the week to your calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Which day to operate on. Defaults to today.
#[derive(Args)]
struct DayArgs {
    /// Day to use (YYYY-MM-DD)
    #[arg(short, long, conflicts_with = "weekday")]
    date: Option<DayKey>,

    /// Next occurrence of this weekday, today included (e.g. "mon", "friday")
    #[arg(short, long)]
    weekday: Option<Weekday>,
}

impl DayArgs {
    fn resolve(&self, today: NaiveDate) -> DayKey {
        match (self.date, self.weekday) {
            (Some(day), _) => day,
            (None, Some(weekday)) => DayKey::next_for_weekday(today, weekday),
            (None, None) => DayKey::new(today),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the entries for a day
    List {
        #[command(flatten)]
        day: DayArgs,
    },
    /// Add an entry, prompting for anything not given
    Add {
        #[command(flatten)]
        day: DayArgs,

        /// Start time (e.g. "09:15 AM")
        #[arg(short, long)]
        time: Option<String>,

        /// What to do
        #[arg(short, long)]
        note: Option<String>,

        /// Length in minutes (1 to 1440)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=1440))]
        duration: Option<u32>,
    },
    /// Delete an entry by its position in the day's list
    Delete {
        index: usize,

        #[command(flatten)]
        day: DayArgs,
    },
    /// Export seven days of entries as an .ics file
    Export {
        /// First day of the week to export (YYYY-MM-DD), defaults to today
        #[arg(long)]
        from: Option<DayKey>,

        /// Where to write the file
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PlannerConfig::load()?;
    let mut store = config.open_store();
    tracing::debug!(data_dir = %config.data_path().display(), "opened entry store");

    // Day keys follow the UTC calendar date
    let today = Utc::now().date_naive();

    match cli.command {
        Commands::List { day } => commands::list::run(&store, day.resolve(today)),
        Commands::Add {
            day,
            time,
            note,
            duration,
        } => commands::add::run(&mut store, day.resolve(today), time, note, duration),
        Commands::Delete { index, day } => {
            commands::delete::run(&mut store, day.resolve(today), index)
        }
        Commands::Export { from, output } => {
            let start = from.map(|d| d.date()).unwrap_or(today);
            commands::export::run(&store, &config, start, output)
        }
    }
}
