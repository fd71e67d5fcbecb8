use crate::error::{ScaleError, ScaleResult};

/// Continuous linear mapping between a fractional index domain and a pixel range.
///
/// The domain is expressed in ordinal-index units and is allowed to be
/// fractional on either end, which is how partially visible edge samples are
/// represented. Mapping and inversion extrapolate freely outside the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ScaleResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ScaleError::InvalidDomain(
                "linear domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ScaleError::InvalidRange(
                "linear range must be finite".to_owned(),
            ));
        }

        Ok(Self { domain, range })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.domain
    }

    pub(crate) fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.range
    }

    pub(crate) fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    /// Maps a fractional index to a pixel coordinate.
    ///
    /// A zero-span domain maps every input to the middle of the range, which
    /// keeps single-sample domains centered instead of degenerating to NaN.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        self.range.0 + (value - self.domain.0) / span * (self.range.1 - self.range.0)
    }

    /// Inverts a pixel coordinate back to a fractional index.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range.1 - self.range.0;
        if span == 0.0 {
            return (self.domain.0 + self.domain.1) / 2.0;
        }
        self.domain.0 + (pixel - self.range.0) / span * (self.domain.1 - self.domain.0)
    }
}

/// Pushes a pixel range outward by `amount` on both ends.
///
/// Inverting a widened range back through the unwidened mapping yields a
/// slightly larger index domain, which pulls the first and last bands inward
/// so they are not clipped at the plot edges.
#[must_use]
pub fn widen(range: (f64, f64), amount: f64) -> (f64, f64) {
    (range.0 - amount, range.1 + amount)
}
