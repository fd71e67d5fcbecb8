use chrono::{Datelike, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::TimeStamp;
use crate::time::Calendar;

/// Label tier matched to the granularity of the last generated ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickFormat {
    /// Day-level ticks: `Mar 15`.
    Daily,
    /// Month/year-level ticks: month name, or the year at January.
    Yearly,
    /// Sub-day ticks: clock time, switching to the date on day changes.
    Intraday,
    /// Single-point fallback: finest nonzero clock field decides.
    Generic,
}

/// Stateful tick label renderer.
///
/// Obtain one per axis pass via `TimeIndexScale::tick_format` and feed it the
/// ticks in display order. The intraday tier tracks the previously formatted
/// day internally, so each formatter instance is independent and a fresh one
/// always starts from a clean slate.
#[derive(Debug, Clone)]
pub struct LabelFormatter {
    tier: TickFormat,
    calendar: Calendar,
    previous_day: Option<NaiveDate>,
}

impl LabelFormatter {
    pub(crate) fn new(tier: TickFormat, calendar: Calendar) -> Self {
        Self {
            tier,
            calendar,
            previous_day: None,
        }
    }

    #[must_use]
    pub fn tier(&self) -> TickFormat {
        self.tier
    }

    /// Renders one tick label.
    ///
    /// Timestamps outside the representable calendar range fall back to the
    /// raw millisecond value.
    pub fn format(&mut self, time: TimeStamp) -> String {
        let Some(naive) = self.calendar.to_datetime(time).map(|dt| dt.naive_local()) else {
            return time.to_string();
        };

        match self.tier {
            TickFormat::Daily => naive.format("%b %e").to_string(),
            TickFormat::Yearly => {
                if naive.month() > 1 {
                    naive.format("%b").to_string()
                } else {
                    naive.format("%Y").to_string()
                }
            }
            TickFormat::Intraday => {
                let day_changed = self
                    .previous_day
                    .is_some_and(|previous| previous != naive.date());
                self.previous_day = Some(naive.date());
                if day_changed {
                    naive.format("%b %e").to_string()
                } else {
                    naive.format("%H:%M").to_string()
                }
            }
            TickFormat::Generic => {
                if naive.second() != 0 {
                    naive.format(":%S").to_string()
                } else if naive.minute() != 0 {
                    naive.format("%I:%M").to_string()
                } else if naive.hour() != 0 {
                    naive.format("%I %p").to_string()
                } else {
                    naive.format("%b %e").to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LabelFormatter, TickFormat};
    use crate::time::Calendar;

    // 2024-03-15 00:00:00 UTC
    const MAR_15_2024: i64 = 1_710_460_800_000;
    const HOUR: i64 = 3_600_000;

    #[test]
    fn daily_tier_prints_month_and_day() {
        let mut formatter = LabelFormatter::new(TickFormat::Daily, Calendar::Utc);
        assert_eq!(formatter.format(MAR_15_2024), "Mar 15");
    }

    #[test]
    fn yearly_tier_prints_the_year_at_january() {
        let mut formatter = LabelFormatter::new(TickFormat::Yearly, Calendar::Utc);
        // 2024-01-01 and 2024-03-01
        assert_eq!(formatter.format(1_704_067_200_000), "2024");
        assert_eq!(formatter.format(1_709_251_200_000), "Mar");
    }

    #[test]
    fn intraday_tier_switches_to_the_date_on_day_change() {
        let mut formatter = LabelFormatter::new(TickFormat::Intraday, Calendar::Utc);
        assert_eq!(formatter.format(MAR_15_2024 + 10 * HOUR), "10:00");
        assert_eq!(formatter.format(MAR_15_2024 + 14 * HOUR), "14:00");
        assert_eq!(formatter.format(MAR_15_2024 + 25 * HOUR), "Mar 16");
        assert_eq!(formatter.format(MAR_15_2024 + 26 * HOUR), "02:00");
    }

    #[test]
    fn intraday_state_does_not_leak_between_formatters() {
        let mut first = LabelFormatter::new(TickFormat::Intraday, Calendar::Utc);
        let _ = first.format(MAR_15_2024 + 10 * HOUR);

        let mut second = LabelFormatter::new(TickFormat::Intraday, Calendar::Utc);
        assert_eq!(second.format(MAR_15_2024 + 25 * HOUR), "01:00");
    }

    #[test]
    fn generic_tier_picks_the_finest_nonzero_field() {
        let mut formatter = LabelFormatter::new(TickFormat::Generic, Calendar::Utc);
        assert_eq!(formatter.format(MAR_15_2024 + 30_000), ":30");
        assert_eq!(formatter.format(MAR_15_2024 + 9 * HOUR + 5 * 60_000), "09:05");
        assert_eq!(formatter.format(MAR_15_2024 + 9 * HOUR), "09 AM");
        assert_eq!(formatter.format(MAR_15_2024), "Mar 15");
    }
}
