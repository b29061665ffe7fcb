//! Twelve-hour entry times.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::TIME_STEP_MINUTES;
use crate::error::{PlannerError, PlannerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// A wall-clock time of day as shown in the planner, e.g. `"09:15 AM"`.
///
/// Hours run `1..=12` and minutes are quantized to 15 minute steps.
/// Persisted as its display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryTime {
    hour: u32,
    minute: u32,
    meridiem: Meridiem,
}

impl EntryTime {
    pub fn new(hour: u32, minute: u32, meridiem: Meridiem) -> PlannerResult<Self> {
        let time = EntryTime {
            hour,
            minute,
            meridiem,
        };
        if !(1..=12).contains(&hour) || minute >= 60 || minute % TIME_STEP_MINUTES != 0 {
            return Err(PlannerError::InvalidTime(time.to_string()));
        }
        Ok(time)
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Hour (0-23) and minute on a 24-hour clock.
    pub fn to_24h(&self) -> (u32, u32) {
        let hour = match (self.meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        (hour, self.minute)
    }

    /// Hour and minute after `duration` minutes have elapsed.
    ///
    /// Whole hours carry into the hour field, which is not wrapped at 24:
    /// `11:50 PM` plus 20 minutes yields `(24, 10)`.
    pub fn end_after(&self, duration: u32) -> (u64, u64) {
        let (hour, minute) = self.to_24h();
        let mut end_hour = u64::from(hour);
        let mut end_minute = u64::from(minute) + u64::from(duration);
        if end_minute >= 60 {
            end_hour += end_minute / 60;
            end_minute %= 60;
        }
        (end_hour, end_minute)
    }

    /// Every selectable time, AM first then PM, hours 01 through 12.
    pub fn slots() -> impl Iterator<Item = EntryTime> {
        [Meridiem::Am, Meridiem::Pm].into_iter().flat_map(|meridiem| {
            (1..=12).flat_map(move |hour| {
                (0..60)
                    .step_by(TIME_STEP_MINUTES as usize)
                    .map(move |minute| EntryTime {
                        hour,
                        minute,
                        meridiem,
                    })
            })
        })
    }
}

impl FromStr for EntryTime {
    type Err = PlannerError;

    fn from_str(s: &str) -> PlannerResult<Self> {
        let invalid = || PlannerError::InvalidTime(s.to_string());

        let (clock, suffix) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let meridiem = match suffix.trim().to_ascii_uppercase().as_str() {
            "AM" => Meridiem::Am,
            "PM" => Meridiem::Pm,
            _ => return Err(invalid()),
        };

        let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;

        EntryTime::new(hour, minute, meridiem).map_err(|_| invalid())
    }
}

impl TryFrom<String> for EntryTime {
    type Error = PlannerError;

    fn try_from(value: String) -> PlannerResult<Self> {
        value.parse()
    }
}

impl From<EntryTime> for String {
    fn from(time: EntryTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for EntryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} {}",
            self.hour,
            self.minute,
            self.meridiem.as_str()
        )
    }
}
