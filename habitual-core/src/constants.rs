/// Duration applied to entries saved without one.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Longest duration an entry may have: one full day.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// Granularity of selectable entry times.
pub const TIME_STEP_MINUTES: u32 = 15;

/// Number of consecutive days covered by a week export.
pub const DAYS_PER_WEEK: u64 = 7;

/// Suffix appended to a day key to form its storage key.
pub const ENTRIES_KEY_SUFFIX: &str = "-entries";

pub const DEFAULT_PRODUCT_ID: &str = "Habitual App";
pub const DEFAULT_UID_NAMESPACE: &str = "habitual";
pub const DEFAULT_EXPORT_FILENAME: &str = "habitual-week.ics";

pub const CALENDAR_MIME_TYPE: &str = "text/calendar";

/// Durations offered when an entry is confirmed.
pub const DURATION_CHOICES: [u32; 6] = [15, 30, 45, 60, 90, 120];
