use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::KeyValueStore;
use crate::error::{PlannerError, PlannerResult};

/// Backend keeping one `<key>.json` file per key inside a directory.
///
/// Writes go to a temporary file next to the target which is then renamed
/// over it, so readers see either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PlannerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PlannerError::Storage(format!("Invalid storage key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PlannerResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> PlannerResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| {
            PlannerError::Storage(format!("Could not write {}: {}", path.display(), e.error))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_key::DayKey;
    use crate::entry::Entry;
    use crate::store::EntryStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("2026-10-14-entries").unwrap().is_none());
    }

    #[test]
    fn test_set_replaces_whole_value() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        store.set("k", "a much longer first value").unwrap();
        store.set("k", "short").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("short"));
        let files: Vec<_> = std::fs::read_dir(store.dir()).unwrap().collect();
        assert_eq!(files.len(), 1, "temporary files should not be left behind");
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("a/b").is_err());
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let day = DayKey::new(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
        let entry = Entry::new("07:45 AM".parse().unwrap(), "walk the dog", 15).unwrap();

        let mut store = EntryStore::new(FileStore::new(dir.path()));
        store.add_entry(&day, entry.clone()).unwrap();
        drop(store);

        let reopened = EntryStore::new(FileStore::new(dir.path()));
        assert_eq!(reopened.list_entries(&day), vec![entry]);
        assert!(dir.path().join("2026-10-14-entries.json").exists());
    }
}
