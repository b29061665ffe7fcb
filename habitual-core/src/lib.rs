//! Core types for the habitual day planner.
//!
//! - `store` keeps each day's entries in a key-value backend
//! - `export` turns a week of entries into an iCalendar document
//! - `session` holds the pending entry while its duration is chosen

pub mod config;
pub mod constants;
pub mod day_key;
pub mod entry;
pub mod error;
pub mod export;
pub mod session;
pub mod store;

pub use day_key::DayKey;
pub use entry::{Entry, EntryTime, Meridiem};
pub use error::{PlannerError, PlannerResult};
pub use export::{CalendarFile, ExportOptions, ExportOutcome, export_week};
pub use session::{DaySession, PendingEntry};
pub use store::{EntryStore, FileStore, KeyValueStore, MemoryStore};
