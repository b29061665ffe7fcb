use anyhow::Result;
use habitual_core::{DayKey, EntryStore, KeyValueStore};
use owo_colors::OwoColorize;

use crate::render::{Render, render_day};

pub fn run<S: KeyValueStore>(store: &mut EntryStore<S>, day: DayKey, index: usize) -> Result<()> {
    match store.delete_entry(&day, index)? {
        Some(entry) => println!("{} {}", "  Deleted:".red(), entry.render()),
        None => println!("{}", format!("  No entry at index {}", index).dimmed()),
    }

    println!("{}", render_day(&day, &store.list_entries(&day)));
    Ok(())
}
