//! Colored terminal rendering for planner types.

use habitual_core::{DayKey, Entry};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Entry {
    fn render(&self) -> String {
        let duration = format!("{} min", self.duration());
        format!(
            "{} {} {}",
            self.time().to_string().cyan(),
            // Multi-line notes stay on one row
            self.note().replace('\n', " / "),
            duration.dimmed()
        )
    }
}

impl Render for DayKey {
    fn render(&self) -> String {
        format!("📅 {}", self.label().bold())
    }
}

/// Render a day's entries with the index used by `delete`.
pub fn render_day(day: &DayKey, entries: &[Entry]) -> String {
    let mut lines = vec![day.render()];

    if entries.is_empty() {
        lines.push(format!("   {}", "No entries".dimmed()));
    }

    for (idx, entry) in entries.iter().enumerate() {
        let index = format!("[{}]", idx);
        lines.push(format!("   {} {}", index.dimmed(), entry.render()));
    }

    lines.join("\n")
}
