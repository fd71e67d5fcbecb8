//! Pan/zoom adapter for external interaction controllers.

use crate::core::TimeIndexScale;
use crate::error::{ScaleError, ScaleResult};

/// Mutable view over a [`TimeIndexScale`] that translates pan/zoom gestures
/// into ordinal-window changes.
///
/// Every window change recomputes the band width synchronously, and the zoom
/// limit captured by the last domain application serves as both the clamp
/// boundary and the `reset` target.
#[derive(Debug)]
pub struct Zoomable<'a> {
    scale: &'a mut TimeIndexScale,
}

impl<'a> Zoomable<'a> {
    pub(crate) fn new(scale: &'a mut TimeIndexScale) -> Self {
        Self { scale }
    }

    /// The current fractional ordinal window.
    #[must_use]
    pub fn window(&self) -> (f64, f64) {
        self.scale.index_domain()
    }

    #[must_use]
    pub fn zoom_limit(&self) -> (f64, f64) {
        self.scale.zoom_limit()
    }

    /// Sets the ordinal window, clamped inside the zoom limit.
    pub fn set_window(&mut self, start: f64, end: f64) -> ScaleResult<&mut Self> {
        self.scale.set_zoom_window(start, end)?;
        Ok(self)
    }

    /// Translates the window by an ordinal-index delta.
    pub fn pan_by(&mut self, delta_index: f64) -> ScaleResult<&mut Self> {
        if !delta_index.is_finite() {
            return Err(ScaleError::InvalidRange(
                "pan delta must be finite".to_owned(),
            ));
        }

        let (start, end) = self.window();
        self.set_window(start + delta_index, end + delta_index)
    }

    /// Rescales the window around an anchor index.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out; the anchor
    /// keeps its on-screen position.
    pub fn zoom_by(&mut self, factor: f64, anchor_index: f64) -> ScaleResult<&mut Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ScaleError::InvalidRange(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor_index.is_finite() {
            return Err(ScaleError::InvalidRange(
                "zoom anchor must be finite".to_owned(),
            ));
        }

        let (start, end) = self.window();
        let span = end - start;
        let target_span = span / factor;
        let left_ratio = (anchor_index - start) / span;
        let new_start = anchor_index - left_ratio * target_span;
        self.set_window(new_start, new_start + target_span)
    }

    /// Restores the window captured by the last domain or padding change.
    pub fn reset(&mut self) -> &mut Self {
        let limit = self.scale.zoom_limit();
        self.scale.set_index_domain(limit);
        self.scale.rezoom();
        self
    }
}
