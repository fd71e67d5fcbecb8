use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::TimeStamp;

/// Which wall clock drives interval boundaries and tick labels.
///
/// The two construction variants of the scale differ only in this value:
/// `Local` floors days, weeks and months in the host timezone, `Utc` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Calendar {
    Local,
    Utc,
}

impl Calendar {
    /// Converts epoch milliseconds to a zoned datetime.
    ///
    /// Returns `None` for timestamps outside chrono's representable range.
    #[must_use]
    pub fn to_datetime(self, time: TimeStamp) -> Option<DateTime<FixedOffset>> {
        match self {
            Calendar::Utc => Utc
                .timestamp_millis_opt(time)
                .single()
                .map(|dt| dt.fixed_offset()),
            Calendar::Local => Local
                .timestamp_millis_opt(time)
                .single()
                .map(|dt| dt.fixed_offset()),
        }
    }

    /// Converts a wall-clock datetime back to epoch milliseconds.
    ///
    /// DST-ambiguous local times resolve to the earlier instant; skipped local
    /// times yield `None`.
    #[must_use]
    pub fn from_naive(self, naive: NaiveDateTime) -> Option<TimeStamp> {
        match self {
            Calendar::Utc => Some(Utc.from_utc_datetime(&naive).timestamp_millis()),
            Calendar::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.timestamp_millis()),
        }
    }
}
