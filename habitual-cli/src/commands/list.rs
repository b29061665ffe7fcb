use anyhow::Result;
use habitual_core::{DayKey, EntryStore, KeyValueStore};

use crate::render::render_day;

pub fn run<S: KeyValueStore>(store: &EntryStore<S>, day: DayKey) -> Result<()> {
    let entries = store.list_entries(&day);
    println!("{}", render_day(&day, &entries));
    Ok(())
}
