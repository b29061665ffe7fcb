use anyhow::Result;
use dialoguer::{Input, Select};
use habitual_core::constants::{DEFAULT_DURATION_MINUTES, DURATION_CHOICES};
use habitual_core::{DayKey, DaySession, EntryStore, EntryTime, KeyValueStore, PlannerError};
use owo_colors::OwoColorize;

use crate::render::{Render, render_day};

pub fn run<S: KeyValueStore>(
    store: &mut EntryStore<S>,
    day: DayKey,
    time: Option<String>,
    note: Option<String>,
    duration: Option<u32>,
) -> Result<()> {
    let mut session = DaySession::new(day);

    // --- Time ---
    let time = match time {
        Some(t) => t.parse::<EntryTime>()?,
        None => prompt_time()?,
    };

    // --- Note ---
    let note = match note {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Task")
            .allow_empty(true)
            .interact_text()?,
    };

    match session.begin_entry(time, &note) {
        Ok(_) => {}
        Err(PlannerError::BlankNote) => {
            println!("{}", "  Nothing added: the task is blank".dimmed());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    // --- Duration ---
    let duration = match duration {
        Some(d) => d,
        None => match prompt_duration()? {
            Some(d) => d,
            None => {
                session.cancel();
                println!("{}", "  Cancelled".dimmed());
                return Ok(());
            }
        },
    };

    if let Some(entry) = session.confirm(store, duration)? {
        println!("{} {}", "  Added:".green(), entry.render());
    }

    println!("{}", render_day(&session.day(), &session.entries(store)));
    Ok(())
}

/// Pick from the same 15 minute slots the planner offers.
fn prompt_time() -> Result<EntryTime> {
    let slots: Vec<EntryTime> = EntryTime::slots().collect();
    let items: Vec<String> = slots.iter().map(|t| t.to_string()).collect();

    let selection = Select::new()
        .with_prompt("  Time")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(slots[selection])
}

/// Returns `None` when the prompt is dismissed.
fn prompt_duration() -> Result<Option<u32>> {
    let items: Vec<String> = DURATION_CHOICES.iter().map(|d| format!("{} min", d)).collect();
    let default = DURATION_CHOICES
        .iter()
        .position(|d| *d == DEFAULT_DURATION_MINUTES)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("  How long? (esc to cancel)")
        .items(&items)
        .default(default)
        .interact_opt()?;

    Ok(selection.map(|idx| DURATION_CHOICES[idx]))
}
