//! Week export to iCalendar.
//!
//! Times are written as floating local timestamps (`YYYYMMDDTHHMMSS`, no
//! `Z` and no `TZID`).

use std::path::Path;

use chrono::NaiveDate;
use icalendar::{Calendar, Component};

use crate::config::PlannerConfig;
use crate::constants::{
    CALENDAR_MIME_TYPE, DEFAULT_EXPORT_FILENAME, DEFAULT_PRODUCT_ID, DEFAULT_UID_NAMESPACE,
};
use crate::day_key::DayKey;
use crate::entry::Entry;
use crate::error::PlannerResult;
use crate::store::{EntryStore, KeyValueStore};

/// Naming used in the exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Appears as `PRODID:-//<product_id>//EN`.
    pub product_id: String,
    /// Domain part of every event UID.
    pub uid_namespace: String,
    pub filename: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            uid_namespace: DEFAULT_UID_NAMESPACE.to_string(),
            filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

impl From<&PlannerConfig> for ExportOptions {
    fn from(config: &PlannerConfig) -> Self {
        ExportOptions {
            product_id: config.product_id.clone(),
            uid_namespace: config.uid_namespace.clone(),
            filename: config.export_filename.clone(),
        }
    }
}

/// A ready-to-download calendar document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub contents: String,
    pub event_count: usize,
}

impl CalendarFile {
    pub fn as_bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }

    pub fn write_to(&self, path: &Path) -> PlannerResult<()> {
        std::fs::write(path, self.as_bytes())?;
        Ok(())
    }
}

/// Result of exporting a week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The week holds no entries; nothing should be downloaded.
    NoEntries,
    Document(CalendarFile),
}

/// Export the seven days starting at `start` as one calendar document.
pub fn export_week<S: KeyValueStore>(
    store: &EntryStore<S>,
    start: NaiveDate,
    options: &ExportOptions,
) -> ExportOutcome {
    let mut cal = Calendar::new();
    let mut event_count = 0;

    for day in DayKey::week_from(start) {
        for (index, entry) in store.list_entries(&day).iter().enumerate() {
            cal.push(build_event(&day, index, entry, options));
            event_count += 1;
        }
    }

    if event_count == 0 {
        tracing::debug!(%start, "no entries in week, skipping export");
        return ExportOutcome::NoEntries;
    }

    let cal = cal.done();
    let contents = rewrite_header(&cal.to_string(), &options.product_id);
    tracing::debug!(%start, event_count, "exported week");

    ExportOutcome::Document(CalendarFile {
        filename: options.filename.clone(),
        mime_type: CALENDAR_MIME_TYPE,
        contents,
        event_count,
    })
}

fn build_event(
    day: &DayKey,
    index: usize,
    entry: &Entry,
    options: &ExportOptions,
) -> icalendar::Event {
    let date = day.date();
    let (start_hour, start_minute) = entry.time().to_24h();
    let (end_hour, end_minute) = entry.time().end_after(entry.duration());

    let dtstart = floating_stamp(date, u64::from(start_hour), u64::from(start_minute));
    let dtend = floating_stamp(date, end_hour, end_minute);

    let mut event = icalendar::Event::new();
    event.uid(&format!("{}-{}@{}", day, index, options.uid_namespace));
    event.add_property("DTSTAMP", &dtstart);
    event.add_property("DTSTART", &dtstart);
    event.add_property("DTEND", &dtend);
    event.summary(&format!("Notes for {}", day.label()));
    // icalendar writes embedded newlines as a literal \n
    event.description(entry.note());

    event.done()
}

/// `YYYYMMDDTHHMMSS`. The hour is written as given, so an end past
/// midnight stays on the same date with an hour of 24 or more.
fn floating_stamp(date: NaiveDate, hour: u64, minute: u64) -> String {
    format!("{}T{:02}{:02}00", date.format("%Y%m%d"), hour, minute)
}

/// Replace the icalendar crate's PRODID and drop CALSCALE:GREGORIAN
/// (it's the default).
fn rewrite_header(ics: &str, product_id: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:-//{}//EN\r\n", product_id));
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
