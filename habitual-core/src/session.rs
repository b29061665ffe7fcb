//! Interaction state for adding entries to the selected day.
//!
//! Adding happens in two steps: the time and note are captured first, then
//! the entry is saved once a duration is confirmed. Until then it is held
//! here as a pending entry, never in the store.

use chrono::{NaiveDate, Weekday};

use crate::day_key::DayKey;
use crate::entry::{Entry, EntryTime};
use crate::error::{PlannerError, PlannerResult};
use crate::store::{EntryStore, KeyValueStore};

/// A time and note waiting for a duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    pub time: EntryTime,
    pub note: String,
}

#[derive(Debug, Clone)]
pub struct DaySession {
    day: DayKey,
    pending: Option<PendingEntry>,
}

impl DaySession {
    pub fn new(day: DayKey) -> Self {
        DaySession { day, pending: None }
    }

    pub fn day(&self) -> DayKey {
        self.day
    }

    pub fn pending(&self) -> Option<&PendingEntry> {
        self.pending.as_ref()
    }

    /// Switch days. A pending entry belongs to the old day and is dropped.
    pub fn select_day(&mut self, day: DayKey) {
        self.day = day;
        self.pending = None;
    }

    /// Switch to the next `weekday` on or after `reference`.
    pub fn select_weekday(&mut self, reference: NaiveDate, weekday: Weekday) {
        self.select_day(DayKey::next_for_weekday(reference, weekday));
    }

    /// Capture a time and note. Blank notes are refused and leave nothing
    /// pending.
    pub fn begin_entry(&mut self, time: EntryTime, note: &str) -> PlannerResult<&PendingEntry> {
        let note = note.trim();
        if note.is_empty() {
            self.pending = None;
            return Err(PlannerError::BlankNote);
        }

        Ok(&*self.pending.insert(PendingEntry {
            time,
            note: note.to_string(),
        }))
    }

    /// Save the pending entry with `duration` and clear it.
    ///
    /// Returns `Ok(None)` when nothing is pending. An invalid duration
    /// keeps the entry pending so another duration can be chosen.
    pub fn confirm<S: KeyValueStore>(
        &mut self,
        store: &mut EntryStore<S>,
        duration: u32,
    ) -> PlannerResult<Option<Entry>> {
        let Some(pending) = self.pending.as_ref() else {
            return Ok(None);
        };

        let entry = Entry::new(pending.time, &pending.note, duration)?;
        store.add_entry(&self.day, entry.clone())?;
        self.pending = None;

        Ok(Some(entry))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Entries of the selected day.
    pub fn entries<S: KeyValueStore>(&self, store: &EntryStore<S>) -> Vec<Entry> {
        store.list_entries(&self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn time(s: &str) -> EntryTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_confirm_saves_and_clears() {
        let mut store = EntryStore::new(MemoryStore::new());
        let mut session = DaySession::new(DayKey::new(today()));

        session.begin_entry(time("10:30 AM"), " review PRs ").unwrap();
        let saved = session.confirm(&mut store, 45).unwrap().unwrap();

        assert_eq!(saved.note(), "review PRs");
        assert_eq!(saved.duration(), 45);
        assert!(session.pending().is_none());
        assert_eq!(session.entries(&store), vec![saved]);
    }

    #[test]
    fn test_blank_note_leaves_nothing_pending() {
        let mut store = EntryStore::new(MemoryStore::new());
        let mut session = DaySession::new(DayKey::new(today()));

        assert!(matches!(
            session.begin_entry(time("10:30 AM"), "   "),
            Err(PlannerError::BlankNote)
        ));
        assert!(session.pending().is_none());
        assert!(session.confirm(&mut store, 30).unwrap().is_none());
        assert!(session.entries(&store).is_empty());
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut store = EntryStore::new(MemoryStore::new());
        let mut session = DaySession::new(DayKey::new(today()));

        session.begin_entry(time("10:30 AM"), "maybe").unwrap();
        session.cancel();

        assert!(session.confirm(&mut store, 30).unwrap().is_none());
        assert!(session.entries(&store).is_empty());
    }

    #[test]
    fn test_zero_duration_keeps_pending() {
        let mut store = EntryStore::new(MemoryStore::new());
        let mut session = DaySession::new(DayKey::new(today()));

        session.begin_entry(time("10:30 AM"), "retry").unwrap();
        assert!(session.confirm(&mut store, 0).is_err());
        assert!(session.pending().is_some());

        assert!(session.confirm(&mut store, 15).unwrap().is_some());
    }

    #[test]
    fn test_changing_day_drops_pending() {
        let mut store = EntryStore::new(MemoryStore::new());
        let mut session = DaySession::new(DayKey::new(today()));

        session.begin_entry(time("10:30 AM"), "wrong day").unwrap();
        session.select_weekday(today(), Weekday::Fri);

        assert_eq!(session.day().to_string(), "2026-10-16");
        assert!(session.pending().is_none());
        assert!(session.confirm(&mut store, 30).unwrap().is_none());
    }
}
