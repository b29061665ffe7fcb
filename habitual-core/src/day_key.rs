//! Calendar day identifiers.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::constants::{DAYS_PER_WEEK, ENTRIES_KEY_SUFFIX};
use crate::error::{PlannerError, PlannerResult};

/// One calendar day, written as `YYYY-MM-DD`.
///
/// Every day owns exactly one ordered list of entries, stored under
/// [`DayKey::storage_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        DayKey(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Key of this day's entry list in the backing store.
    pub fn storage_key(&self) -> String {
        format!("{}{}", self, ENTRIES_KEY_SUFFIX)
    }

    /// Human-readable label such as "Wednesday, Oct 14".
    pub fn label(&self) -> String {
        self.0.format("%A, %b %-d").to_string()
    }

    /// The first day on or after `reference` that falls on `weekday`.
    pub fn next_for_weekday(reference: NaiveDate, weekday: Weekday) -> Self {
        let current = reference.weekday().num_days_from_sunday();
        let target = weekday.num_days_from_sunday();
        let offset = (target + 7 - current) % 7;

        DayKey(reference + Days::new(u64::from(offset)))
    }

    /// The seven consecutive days starting at `start`.
    pub fn week_from(start: NaiveDate) -> Vec<DayKey> {
        start
            .iter_days()
            .take(DAYS_PER_WEEK as usize)
            .map(DayKey)
            .collect()
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        DayKey(date)
    }
}

impl FromStr for DayKey {
    type Err = PlannerError;

    fn from_str(s: &str) -> PlannerResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(DayKey)
            .map_err(|_| PlannerError::InvalidDayKey(s.to_string()))
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
