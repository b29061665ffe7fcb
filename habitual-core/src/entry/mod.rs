//! Planner entries.

mod time;

pub use time::{EntryTime, Meridiem};

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{DEFAULT_DURATION_MINUTES, MAX_DURATION_MINUTES};
use crate::error::{PlannerError, PlannerResult};

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

/// Entries saved before durations existed carry none, or a zero. Values
/// longer than a day are read the same way.
fn duration_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let duration = Option::<u32>::deserialize(deserializer)?;
    Ok(duration
        .filter(|d| (1..=MAX_DURATION_MINUTES).contains(d))
        .unwrap_or(DEFAULT_DURATION_MINUTES))
}

/// One scheduled task on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    time: EntryTime,
    note: String,
    #[serde(default = "default_duration", deserialize_with = "duration_or_default")]
    duration: u32,
}

impl Entry {
    /// Build an entry, trimming the note.
    ///
    /// Fails on a blank note or a duration outside one minute to one day.
    pub fn new(time: EntryTime, note: &str, duration: u32) -> PlannerResult<Self> {
        let note = note.trim();
        if note.is_empty() {
            return Err(PlannerError::BlankNote);
        }
        if !(1..=MAX_DURATION_MINUTES).contains(&duration) {
            return Err(PlannerError::InvalidDuration(duration));
        }

        Ok(Entry {
            time,
            note: note.to_string(),
            duration,
        })
    }

    pub fn time(&self) -> EntryTime {
        self.time
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Length in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }
}
