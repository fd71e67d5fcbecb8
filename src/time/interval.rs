use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::TimeStamp;
use crate::time::Calendar;

/// Calendar interval used to generate candidate tick timestamps.
///
/// Second and minute boundaries are truncated on the absolute timeline;
/// hour and coarser boundaries are floored on the wall clock of the chosen
/// [`Calendar`], so local-time scales keep midnight and month starts aligned
/// with the host timezone. Weeks start on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInterval {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeInterval {
    /// Generates interval boundaries in `[start, stop)`, every `step`-th one,
    /// beginning at the first boundary at or after `start`.
    ///
    /// Returns an empty sequence for a non-positive step, an empty window, or
    /// timestamps outside the representable calendar range.
    #[must_use]
    pub fn range(
        self,
        start: TimeStamp,
        stop: TimeStamp,
        step: i64,
        calendar: Calendar,
    ) -> Vec<TimeStamp> {
        if step <= 0 || start >= stop {
            return Vec::new();
        }

        let Some(mut tick) = self.ceil(start, calendar) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        while tick < stop {
            out.push(tick);
            match self.offset(tick, step, calendar) {
                Some(next) if next > tick => tick = next,
                _ => break,
            }
        }
        out
    }

    /// First interval boundary at or after `time`.
    pub(crate) fn ceil(self, time: TimeStamp, calendar: Calendar) -> Option<TimeStamp> {
        let floored = self.floor(time, calendar)?;
        if floored < time {
            self.offset(floored, 1, calendar)
        } else {
            Some(floored)
        }
    }

    /// Largest interval boundary at or before `time`.
    pub(crate) fn floor(self, time: TimeStamp, calendar: Calendar) -> Option<TimeStamp> {
        match self {
            TimeInterval::Second => Some(time.div_euclid(1_000) * 1_000),
            TimeInterval::Minute => Some(time.div_euclid(60_000) * 60_000),
            _ => {
                let naive = calendar.to_datetime(time)?.naive_local();
                let floored = self.floor_naive(naive)?;
                calendar.from_naive(floored)
            }
        }
    }

    fn floor_naive(self, naive: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            TimeInterval::Hour => naive.date().and_hms_opt(naive.hour(), 0, 0),
            TimeInterval::Day => naive.date().and_hms_opt(0, 0, 0),
            TimeInterval::Week => {
                let days_past_monday = u64::from(naive.weekday().num_days_from_monday());
                naive
                    .date()
                    .checked_sub_days(Days::new(days_past_monday))?
                    .and_hms_opt(0, 0, 0)
            }
            TimeInterval::Month => {
                NaiveDate::from_ymd_opt(naive.year(), naive.month(), 1)?.and_hms_opt(0, 0, 0)
            }
            TimeInterval::Year => {
                NaiveDate::from_ymd_opt(naive.year(), 1, 1)?.and_hms_opt(0, 0, 0)
            }
            TimeInterval::Second | TimeInterval::Minute => Some(naive),
        }
    }

    /// Advances `time` by `step` intervals.
    ///
    /// Sub-day intervals advance on the absolute timeline; day and coarser
    /// intervals advance the wall clock, so a local day offset lands on the
    /// same local time across a DST change.
    pub(crate) fn offset(
        self,
        time: TimeStamp,
        step: i64,
        calendar: Calendar,
    ) -> Option<TimeStamp> {
        match self {
            TimeInterval::Second => time.checked_add(step.checked_mul(1_000)?),
            TimeInterval::Minute => time.checked_add(step.checked_mul(60_000)?),
            TimeInterval::Hour => time.checked_add(step.checked_mul(3_600_000)?),
            TimeInterval::Day | TimeInterval::Week | TimeInterval::Month | TimeInterval::Year => {
                let naive = calendar.to_datetime(time)?.naive_local();
                let shifted = match self {
                    TimeInterval::Day => {
                        naive.checked_add_days(Days::new(u64::try_from(step).ok()?))?
                    }
                    TimeInterval::Week => {
                        naive.checked_add_days(Days::new(u64::try_from(step.checked_mul(7)?).ok()?))?
                    }
                    TimeInterval::Month => {
                        naive.checked_add_months(Months::new(u32::try_from(step).ok()?))?
                    }
                    TimeInterval::Year => naive
                        .checked_add_months(Months::new(u32::try_from(step.checked_mul(12)?).ok()?))?,
                    _ => unreachable!("sub-day intervals handled above"),
                };
                calendar.from_naive(shifted)
            }
        }
    }
}
