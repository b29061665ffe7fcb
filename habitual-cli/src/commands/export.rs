use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use habitual_core::config::PlannerConfig;
use habitual_core::{EntryStore, ExportOptions, ExportOutcome, KeyValueStore, export_week};
use owo_colors::OwoColorize;

pub fn run<S: KeyValueStore>(
    store: &EntryStore<S>,
    config: &PlannerConfig,
    start: NaiveDate,
    output: Option<PathBuf>,
) -> Result<()> {
    let options = ExportOptions::from(config);

    let file = match export_week(store, start, &options) {
        ExportOutcome::Document(file) => file,
        ExportOutcome::NoEntries => {
            println!("{}", "  No entries this week, nothing exported".dimmed());
            return Ok(());
        }
    };

    let path = output.unwrap_or_else(|| PathBuf::from(&file.filename));
    file.write_to(&path)
        .with_context(|| format!("Could not write {}", path.display()))?;

    println!(
        "{}",
        format!("  Exported {} entries to {}", file.event_count, path.display()).green()
    );
    Ok(())
}
