//! Tick planning over the visible sub-domain.
//!
//! Candidate calendar granularities form two fixed ladders, one for daily and
//! one for intraday data. Planning picks the ladder entry whose step best
//! matches the visible span divided by the proportional target count, then
//! snapping aligns ideal tick times onto values that actually exist in the
//! domain.

use crate::core::time_index::TimeStamp;
use crate::time::{TickFormat, TimeInterval};

pub(crate) const DAY_MS: i64 = 86_400_000;
pub(crate) const DEFAULT_TICK_COUNT: usize = 10;

/// A candidate granularity: calendar interval, step multiplier and the label
/// tier that renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TickMethod {
    pub interval: TimeInterval,
    pub step: i64,
    pub format: TickFormat,
}

const fn method(interval: TimeInterval, step: i64, format: TickFormat) -> TickMethod {
    TickMethod {
        interval,
        step,
        format,
    }
}

pub(crate) const GENERIC_METHOD: TickMethod =
    method(TimeInterval::Second, 1, TickFormat::Generic);

const DAILY_METHODS: [TickMethod; 5] = [
    method(TimeInterval::Day, 1, TickFormat::Daily),
    method(TimeInterval::Week, 1, TickFormat::Daily),
    method(TimeInterval::Month, 1, TickFormat::Yearly),
    method(TimeInterval::Month, 3, TickFormat::Yearly),
    method(TimeInterval::Year, 1, TickFormat::Yearly),
];

const DAILY_STEPS_MS: [i64; 5] = [
    DAY_MS,
    7 * DAY_MS,
    30 * DAY_MS,
    90 * DAY_MS,
    365 * DAY_MS,
];

const INTRADAY_METHODS: [TickMethod; 15] = [
    method(TimeInterval::Second, 1, TickFormat::Intraday),
    method(TimeInterval::Second, 5, TickFormat::Intraday),
    method(TimeInterval::Second, 15, TickFormat::Intraday),
    method(TimeInterval::Second, 30, TickFormat::Intraday),
    method(TimeInterval::Minute, 1, TickFormat::Intraday),
    method(TimeInterval::Minute, 5, TickFormat::Intraday),
    method(TimeInterval::Minute, 15, TickFormat::Intraday),
    method(TimeInterval::Minute, 30, TickFormat::Intraday),
    method(TimeInterval::Hour, 1, TickFormat::Intraday),
    method(TimeInterval::Hour, 2, TickFormat::Intraday),
    method(TimeInterval::Hour, 3, TickFormat::Intraday),
    method(TimeInterval::Hour, 4, TickFormat::Intraday),
    method(TimeInterval::Hour, 6, TickFormat::Intraday),
    method(TimeInterval::Hour, 12, TickFormat::Intraday),
    method(TimeInterval::Day, 1, TickFormat::Daily),
];

const INTRADAY_STEPS_MS: [i64; 15] = [
    1_000,
    5_000,
    15_000,
    30_000,
    60_000,
    300_000,
    900_000,
    1_800_000,
    3_600_000,
    7_200_000,
    10_800_000,
    14_400_000,
    21_600_000,
    43_200_000,
    DAY_MS,
];

/// Selects the ladder entry for the visible sub-domain.
///
/// `index_domain` is the full fractional ordinal window; the proportion of it
/// that is visible scales the target count down so that zooming out does not
/// flood the axis.
pub(crate) fn select_method(
    visible: &[TimeStamp],
    index_domain: (f64, f64),
    count: usize,
) -> TickMethod {
    if visible.len() == 1 {
        return GENERIC_METHOD;
    }

    let spacing = (visible[1] - visible[0]) as f64;
    let extent = (visible[visible.len() - 1] - visible[0]) as f64;
    let days_visible = extent / DAY_MS as f64;
    let intraday = spacing < DAY_MS as f64 && days_visible < 6.0;

    let (methods, steps): (&[TickMethod], &[i64]) = if intraday {
        (&INTRADAY_METHODS, &INTRADAY_STEPS_MS)
    } else {
        (&DAILY_METHODS, &DAILY_STEPS_MS)
    };

    let visible_fraction = visible.len() as f64 / (index_domain.1 - index_domain.0);
    let k = (visible_fraction * count as f64).round().min(count as f64);
    // k of zero yields an infinite target, which lands past the ladder end.
    let target = extent / k;

    let found = steps.partition_point(|&step| (step as f64) <= target);
    if found >= steps.len() {
        return methods[methods.len() - 1];
    }
    if found == 0 {
        return methods[0];
    }

    // The target sits between two ladder steps; take whichever step ratio is
    // closer to 1, ties to the finer entry.
    let below = (1.0 - steps[found - 1] as f64 / target).abs();
    let above = (1.0 - steps[found] as f64 / target).abs();
    if below <= above {
        methods[found - 1]
    } else {
        methods[found]
    }
}

/// Snaps a candidate tick time onto a value present in the visible domain.
///
/// Exact hits are kept. Misses snap forward to the next existing value, or to
/// the nearer neighbor when `closest` is set; equidistant candidates snap
/// forward either way.
pub(crate) fn snap_to_domain(visible: &[TimeStamp], candidate: TimeStamp, closest: bool) -> TimeStamp {
    debug_assert!(!visible.is_empty());

    match visible.binary_search(&candidate) {
        Ok(found) => visible[found],
        Err(insertion) => {
            if insertion >= visible.len() {
                return visible[visible.len() - 1];
            }
            if closest && insertion > 0 {
                let before = visible[insertion - 1];
                let after = visible[insertion];
                if candidate - before < after - candidate {
                    return before;
                }
                return after;
            }
            visible[insertion]
        }
    }
}
