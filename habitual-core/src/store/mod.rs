//! Per-day entry persistence.
//!
//! Each day's entries live under one key of a [`KeyValueStore`] as a JSON
//! array. Every operation re-reads the backend, so concurrent writers on the
//! same day resolve as last write wins.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::day_key::DayKey;
use crate::entry::Entry;
use crate::error::{PlannerError, PlannerResult};

/// A string key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> PlannerResult<Option<String>>;

    /// Replace the whole value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> PlannerResult<()>;
}

/// Entry lists addressed by day.
pub struct EntryStore<S> {
    backend: S,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(backend: S) -> Self {
        EntryStore { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Entries for `day` in insertion order.
    ///
    /// Missing or unreadable data yields an empty list.
    pub fn list_entries(&self, day: &DayKey) -> Vec<Entry> {
        let key = day.storage_key();

        let raw = match self.backend.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(%key, error = %e, "could not read entries, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(entries) => {
                tracing::debug!(%key, count = entries.len(), "loaded entries");
                entries
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "discarding unparseable entries");
                Vec::new()
            }
        }
    }

    /// Append `entry` to the end of `day`'s list.
    pub fn add_entry(&mut self, day: &DayKey, entry: Entry) -> PlannerResult<()> {
        let mut entries = self.list_entries(day);
        entries.push(entry);
        self.write_entries(day, &entries)
    }

    /// Remove the entry at `index` and return it.
    ///
    /// An out of range index leaves the list untouched and returns `None`.
    pub fn delete_entry(&mut self, day: &DayKey, index: usize) -> PlannerResult<Option<Entry>> {
        let mut entries = self.list_entries(day);
        if index >= entries.len() {
            tracing::debug!(%day, index, len = entries.len(), "delete index out of range");
            return Ok(None);
        }

        let removed = entries.remove(index);
        self.write_entries(day, &entries)?;
        Ok(Some(removed))
    }

    fn write_entries(&mut self, day: &DayKey, entries: &[Entry]) -> PlannerResult<()> {
        let key = day.storage_key();
        let raw = serde_json::to_string(entries)
            .map_err(|e| PlannerError::Serialization(e.to_string()))?;

        self.backend.set(&key, &raw)?;
        tracing::debug!(%key, count = entries.len(), "saved entries");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day() -> DayKey {
        DayKey::new(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
    }

    fn entry(time: &str, note: &str) -> Entry {
        Entry::new(time.parse().unwrap(), note, 30).unwrap()
    }

    fn store_with(entries: &[Entry]) -> EntryStore<MemoryStore> {
        let mut store = EntryStore::new(MemoryStore::new());
        for e in entries {
            store.add_entry(&day(), e.clone()).unwrap();
        }
        store
    }

    #[test]
    fn test_list_missing_day_is_empty() {
        let store = EntryStore::new(MemoryStore::new());
        assert!(store.list_entries(&day()).is_empty());
    }

    #[test]
    fn test_add_appends_last() {
        let mut store = store_with(&[entry("09:00 AM", "a"), entry("08:00 AM", "b")]);
        let before = store.list_entries(&day()).len();

        let new = entry("07:00 PM", "c");
        store.add_entry(&day(), new.clone()).unwrap();

        let after = store.list_entries(&day());
        assert_eq!(after.len(), before + 1);
        assert_eq!(after.last(), Some(&new));
    }

    #[test]
    fn test_days_are_independent() {
        let mut store = store_with(&[entry("09:00 AM", "a")]);
        let other = DayKey::new(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
        store.add_entry(&other, entry("10:00 AM", "b")).unwrap();

        assert_eq!(store.list_entries(&day()).len(), 1);
        assert_eq!(store.list_entries(&other)[0].note(), "b");
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let entries = [entry("09:00 AM", "a"), entry("10:00 AM", "b")];
        let mut store = store_with(&entries);

        assert!(store.delete_entry(&day(), 2).unwrap().is_none());
        assert!(store.delete_entry(&day(), usize::MAX).unwrap().is_none());
        assert_eq!(store.list_entries(&day()), entries);
    }

    #[test]
    fn test_delete_on_empty_day_writes_nothing() {
        let mut store = EntryStore::new(MemoryStore::new());
        assert!(store.delete_entry(&day(), 0).unwrap().is_none());
        assert!(store.backend().get(&day().storage_key()).unwrap().is_none());
    }

    #[test]
    fn test_delete_preserves_order_of_rest() {
        let a = entry("09:00 AM", "a");
        let b = entry("10:00 AM", "b");
        let c = entry("11:00 AM", "c");
        let mut store = store_with(&[a.clone(), b.clone(), c.clone()]);

        let removed = store.delete_entry(&day(), 1).unwrap();
        assert_eq!(removed, Some(b));
        assert_eq!(store.list_entries(&day()), vec![a, c]);
    }

    #[test]
    fn test_round_trip_keeps_order() {
        let entries = vec![
            entry("05:00 PM", "late"),
            entry("06:00 AM", "early"),
            Entry::new("12:15 PM".parse().unwrap(), "lunch\nwith team", 90).unwrap(),
        ];
        let store = store_with(&entries);
        assert_eq!(store.list_entries(&day()), entries);
    }

    #[test]
    fn test_malformed_value_is_empty() {
        let mut backend = MemoryStore::new();
        backend.set(&day().storage_key(), "{not json").unwrap();
        let store = EntryStore::new(backend);
        assert!(store.list_entries(&day()).is_empty());
    }

    #[test]
    fn test_add_over_malformed_value_replaces_it() {
        let mut backend = MemoryStore::new();
        backend
            .set(&day().storage_key(), r#"[{"time":"25:00 XM","note":"x"}]"#)
            .unwrap();
        let mut store = EntryStore::new(backend);

        store.add_entry(&day(), entry("09:00 AM", "fresh")).unwrap();
        let entries = store.list_entries(&day());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].note(), "fresh");
    }

    #[test]
    fn test_reads_legacy_values() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                &day().storage_key(),
                r#"[{"time":"08:00 AM","note":"run"},{"time":"01:15 PM","note":"read","duration":60}]"#,
            )
            .unwrap();
        let store = EntryStore::new(backend);

        let entries = store.list_entries(&day());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].duration(), 30);
        assert_eq!(entries[1].duration(), 60);
    }
}
