//! The composite gap-free scale: an ordinal index over the domain array fused
//! with a continuous index-to-pixel mapping.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::linear::{LinearScale, widen};
use crate::core::lookup::IndexLookup;
use crate::core::ticks::{self, DEFAULT_TICK_COUNT, GENERIC_METHOD};
use crate::error::{ScaleError, ScaleResult};
use crate::interaction::Zoomable;
use crate::time::{Calendar, LabelFormatter, TickFormat, TimeInterval};

/// Epoch milliseconds.
pub type TimeStamp = i64;

/// Tuning controls for band padding and tick snapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeIndexScaleConfig {
    /// Fraction of each band left empty between neighboring samples.
    pub padding: f64,
    /// Fraction of one band kept clear inside both plot edges.
    pub outer_padding: f64,
    /// Snap generated ticks to the nearest domain value instead of forward.
    pub closest_ticks: bool,
}

impl Default for TimeIndexScaleConfig {
    fn default() -> Self {
        Self {
            padding: 0.2,
            outer_padding: 0.65,
            closest_ticks: false,
        }
    }
}

impl TimeIndexScaleConfig {
    fn validate(self) -> ScaleResult<Self> {
        validate_padding(self.padding)?;
        validate_outer_padding(self.outer_padding)?;
        Ok(self)
    }
}

fn validate_padding(padding: f64) -> ScaleResult<()> {
    if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
        return Err(ScaleError::InvalidConfig(
            "padding must be a finite fraction in 0..=1".to_owned(),
        ));
    }
    Ok(())
}

fn validate_outer_padding(outer_padding: f64) -> ScaleResult<()> {
    if !outer_padding.is_finite() || outer_padding < 0.0 {
        return Err(ScaleError::InvalidConfig(
            "outer padding must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

/// Ordinal time scale that plots irregularly sampled series without calendar
/// gaps.
///
/// The full domain array holds every instant at which data exists, sorted
/// ascending. Samples map to pixels through their position in that array, so
/// a weekend between Friday and Monday occupies no axis width. Queries that
/// miss the domain snap deterministically to the nearest bracketing position
/// instead of failing, because axis renderers probe positions that carry no
/// data while diffing against a previous scale state.
#[derive(Debug, Clone)]
pub struct TimeIndexScale {
    calendar: Calendar,
    domain: Vec<TimeStamp>,
    lookup: IndexLookup,
    index: LinearScale,
    padding: f64,
    outer_padding: f64,
    band: f64,
    zoom_limit: (f64, f64),
    closest_ticks: bool,
    tick_state: TickFormat,
}

impl TimeIndexScale {
    /// Local-calendar scale with default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::build(Calendar::Local, TimeIndexScaleConfig::default())
    }

    /// UTC-calendar scale with default tuning.
    #[must_use]
    pub fn utc() -> Self {
        Self::build(Calendar::Utc, TimeIndexScaleConfig::default())
    }

    pub fn with_config(calendar: Calendar, config: TimeIndexScaleConfig) -> ScaleResult<Self> {
        Ok(Self::build(calendar, config.validate()?))
    }

    fn build(calendar: Calendar, config: TimeIndexScaleConfig) -> Self {
        let domain = vec![0, 1];
        let lookup = IndexLookup::build(&domain);
        let index = LinearScale::default();
        let mut scale = Self {
            calendar,
            domain,
            lookup,
            index,
            padding: config.padding,
            outer_padding: config.outer_padding,
            band: 0.0,
            zoom_limit: index.domain(),
            closest_ticks: config.closest_ticks,
            tick_state: TickFormat::Yearly,
        };
        scale.recompute_band();
        scale
    }

    #[must_use]
    pub fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Maps a time value to its pixel coordinate.
    #[must_use]
    pub fn time_to_pixel(&self, time: TimeStamp) -> f64 {
        self.time_to_pixel_offset(time, 0.0)
    }

    /// Maps a time value to a pixel coordinate, displaced by a fractional
    /// index offset.
    ///
    /// Values absent from the domain resolve to a bracketing ordinal
    /// position: one step before the start when earlier than every sample,
    /// otherwise the insertion point found by binary search (which
    /// extrapolates one step past the end for late values).
    #[must_use]
    pub fn time_to_pixel_offset(&self, time: TimeStamp, offset: f64) -> f64 {
        let mapped = match self.lookup.position(time) {
            Some(position) => position as f64,
            None => {
                if self.domain.first().is_some_and(|&first| time < first) {
                    -1.0
                } else {
                    self.domain.partition_point(|&sample| sample <= time) as f64
                }
            }
        };
        self.index.map(mapped + offset)
    }

    /// Inverts a pixel coordinate to the nearest domain value.
    ///
    /// Returns `None` when the rounded ordinal index falls outside the
    /// domain array.
    #[must_use]
    pub fn pixel_to_time(&self, pixel: f64) -> Option<TimeStamp> {
        let index = self.pixel_to_index(pixel);
        if index < 0 {
            return None;
        }
        self.domain.get(usize::try_from(index).ok()?).copied()
    }

    /// Inverts a pixel coordinate to a raw rounded ordinal index.
    ///
    /// The result may be negative or past `len - 1`; callers doing boundary
    /// arithmetic rely on the unclamped value.
    #[must_use]
    pub fn pixel_to_index(&self, pixel: f64) -> i64 {
        let index = self.index.invert(pixel).round();
        if index >= i64::MAX as f64 {
            i64::MAX
        } else if index <= i64::MIN as f64 {
            i64::MIN
        } else {
            index as i64
        }
    }

    /// The full domain array, including samples scrolled out of view.
    #[must_use]
    pub fn full_domain(&self) -> &[TimeStamp] {
        &self.domain
    }

    /// The currently visible slice of the domain, inclusive of partially
    /// visible edge samples.
    #[must_use]
    pub fn visible_domain(&self) -> &[TimeStamp] {
        match self.visible_span() {
            Some((lo, hi)) => &self.domain[lo..=hi],
            None => &[],
        }
    }

    fn visible_span(&self) -> Option<(usize, usize)> {
        if self.domain.is_empty() {
            return None;
        }

        let (start, end) = self.index.domain();
        if start < 0.0 && end < 0.0 {
            return None;
        }

        let lo = start.ceil().max(0.0);
        let hi = end.floor().min((self.domain.len() - 1) as f64);
        if !lo.is_finite() || !hi.is_finite() || lo > hi || hi < 0.0 {
            return None;
        }
        Some((lo as usize, hi as usize))
    }

    /// Replaces the domain wholesale and re-applies padding.
    ///
    /// The array must list every instant that carries data, strictly
    /// increasing. The zoom limit is recaptured from the recomputed window.
    pub fn set_domain(&mut self, domain: Vec<TimeStamp>) -> ScaleResult<&mut Self> {
        if domain.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ScaleError::InvalidDomain(
                "domain must be strictly increasing without duplicates".to_owned(),
            ));
        }

        debug!(samples = domain.len(), "replace scale domain");
        self.domain = domain;
        self.apply_domain();
        Ok(self)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn set_padding(&mut self, padding: f64) -> ScaleResult<&mut Self> {
        validate_padding(padding)?;
        self.padding = padding;
        self.apply_domain();
        Ok(self)
    }

    #[must_use]
    pub fn outer_padding(&self) -> f64 {
        self.outer_padding
    }

    pub fn set_outer_padding(&mut self, outer_padding: f64) -> ScaleResult<&mut Self> {
        validate_outer_padding(outer_padding)?;
        self.outer_padding = outer_padding;
        self.apply_domain();
        Ok(self)
    }

    /// Average pixel width of one domain step after padding.
    ///
    /// The ordinal analogue of a categorical band width, except `time_to_pixel`
    /// returns the center of the band rather than its start, since the
    /// underlying mapping is continuous.
    #[must_use]
    pub fn band(&self) -> f64 {
        self.band
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.index.range()
    }

    /// Sets the output pixel range and recomputes the band width.
    pub fn set_range(&mut self, range: (f64, f64)) -> ScaleResult<&mut Self> {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ScaleError::InvalidRange(
                "pixel range must be finite".to_owned(),
            ));
        }
        self.index.set_range(range);
        self.recompute_band();
        Ok(self)
    }

    #[must_use]
    pub fn closest_ticks(&self) -> bool {
        self.closest_ticks
    }

    /// Toggles snap-forward vs snap-nearest tick alignment.
    pub fn set_closest_ticks(&mut self, closest: bool) -> &mut Self {
        self.closest_ticks = closest;
        self
    }

    /// The ordinal window captured after the last domain or padding change,
    /// used as the reset boundary for zoom interactions.
    #[must_use]
    pub fn zoom_limit(&self) -> (f64, f64) {
        self.zoom_limit
    }

    /// Sets the visible ordinal window, clamped inside the zoom limit.
    ///
    /// The window span is capped to the limit span and the endpoints are
    /// translated back inside the limit when they overshoot.
    pub fn set_zoom_window(&mut self, start: f64, end: f64) -> ScaleResult<&mut Self> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(ScaleError::InvalidRange(
                "zoom window must be finite and ascending".to_owned(),
            ));
        }

        let (limit_start, limit_end) = self.zoom_limit;
        let span = (end - start).min(limit_end - limit_start);
        let mut lo = start;
        let mut hi = start + span;
        if lo < limit_start {
            hi += limit_start - lo;
            lo = limit_start;
        }
        if hi > limit_end {
            lo -= hi - limit_end;
            hi = limit_end;
        }

        trace!(lo, hi, "set zoom window");
        self.index.set_domain((lo, hi));
        self.recompute_band();
        Ok(self)
    }

    /// Zoom-interaction adapter bound to this scale.
    pub fn zoomable(&mut self) -> Zoomable<'_> {
        Zoomable::new(self)
    }

    /// Generates ticks targeting roughly ten labels.
    pub fn ticks(&mut self) -> Vec<TimeStamp> {
        self.ticks_with_count(DEFAULT_TICK_COUNT)
    }

    /// Generates ticks targeting `count` labels.
    ///
    /// The ladder entry is chosen from the visible span, each ideal tick is
    /// snapped onto an existing domain value and consecutive duplicates are
    /// collapsed, so the result is always a subsequence of the visible
    /// domain. The matching label tier is retained for `tick_format`.
    pub fn ticks_with_count(&mut self, count: usize) -> Vec<TimeStamp> {
        let Some((lo, hi)) = self.visible_span() else {
            return Vec::new();
        };

        let method = ticks::select_method(&self.domain[lo..=hi], self.index.domain(), count);
        self.tick_state = method.format;
        self.generate_ticks(lo, hi, method.interval, method.step)
    }

    /// Generates ticks for an explicit interval and step.
    ///
    /// The label tier is still derived from the visible span, matching the
    /// default-count planner.
    pub fn ticks_with_interval(&mut self, interval: TimeInterval, step: i64) -> Vec<TimeStamp> {
        let Some((lo, hi)) = self.visible_span() else {
            return Vec::new();
        };

        let method =
            ticks::select_method(&self.domain[lo..=hi], self.index.domain(), DEFAULT_TICK_COUNT);
        self.tick_state = method.format;
        self.generate_ticks(lo, hi, interval, step)
    }

    fn generate_ticks(
        &mut self,
        lo: usize,
        hi: usize,
        interval: TimeInterval,
        step: i64,
    ) -> Vec<TimeStamp> {
        let visible = &self.domain[lo..=hi];
        if visible.len() == 1 {
            self.tick_state = GENERIC_METHOD.format;
            return vec![visible[0]];
        }

        let candidates = interval.range(visible[0], visible[visible.len() - 1] + 1, step, self.calendar);
        let mut aligned: Vec<TimeStamp> = candidates
            .iter()
            .map(|&candidate| ticks::snap_to_domain(visible, candidate, self.closest_ticks))
            .collect();
        aligned.dedup();
        trace!(
            candidates = candidates.len(),
            ticks = aligned.len(),
            ?interval,
            step,
            "planned ticks"
        );
        aligned
    }

    /// Label formatter for whatever tier the last `ticks*` call selected.
    ///
    /// Returns a fresh formatter each call; call `ticks` first, otherwise the
    /// tier reflects an earlier domain state.
    #[must_use]
    pub fn tick_format(&self) -> LabelFormatter {
        LabelFormatter::new(self.tick_state, self.calendar)
    }

    /// Rebuilds the lookup, fits the ordinal window to the domain, applies
    /// outer padding and recaptures the zoom limit.
    fn apply_domain(&mut self) {
        self.lookup = IndexLookup::build(&self.domain);
        let last = self.domain.len().saturating_sub(1) as f64;
        self.index.set_domain((0.0, last));
        self.recompute_band();

        // Widen the pixel range by a fraction of one band and pull the
        // widened edges back through the mapping; the resulting index window
        // insets the first and last bands from the plot edges.
        let widened = widen(self.index.range(), self.outer_padding * self.band);
        self.index
            .set_domain((self.index.invert(widened.0), self.index.invert(widened.1)));
        self.zoom_limit = self.index.domain();
        self.recompute_band();
    }

    fn recompute_band(&mut self) {
        let last = self.domain.len().saturating_sub(1);
        let pixel_span = (self.index.map(last as f64) - self.index.map(0.0)).abs();
        self.band = pixel_span / (last.max(1) as f64) * (1.0 - self.padding);
    }

    pub(crate) fn rezoom(&mut self) {
        self.recompute_band();
    }

    pub(crate) fn set_index_domain(&mut self, domain: (f64, f64)) {
        self.index.set_domain(domain);
    }

    #[must_use]
    pub(crate) fn index_domain(&self) -> (f64, f64) {
        self.index.domain()
    }
}

impl Default for TimeIndexScale {
    fn default() -> Self {
        Self::new()
    }
}
