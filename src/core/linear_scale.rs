use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const NICE_TICK_COUNT: f64 = 10.0;

/// Continuous numeric-to-pixel mapping with optional clamping and "nice"
/// domain rounding.
///
/// The range may be reversed (`range_start > range_end`) for screen-down
/// value axes. A degenerate domain (`start == end`) maps every value to the
/// range start rather than failing, so flat data still renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    clamp: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "linear scale domain must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: 0.0,
            range_end: 1.0,
            clamp: false,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_clamped(self) -> bool {
        self.clamp
    }

    pub fn with_range(mut self, range: (f64, f64)) -> ChartResult<Self> {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "linear scale range must be finite".to_owned(),
            ));
        }
        self.range_start = range.0;
        self.range_end = range.1;
        Ok(self)
    }

    #[must_use]
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Rounds the domain endpoints outward to multiples of a 1/2/5-ladder
    /// step sized for about ten ticks. Idempotent on already-nice domains.
    #[must_use]
    pub fn nice(mut self) -> Self {
        let reversed = self.domain_start > self.domain_end;
        let (lo, hi) = sorted_pair(self.domain_start, self.domain_end);
        let span = hi - lo;
        if span == 0.0 {
            return self;
        }

        let step = nice_step(span / NICE_TICK_COUNT);
        let lo = (lo / step).floor() * step;
        let hi = (hi / step).ceil() * step;
        if reversed {
            self.domain_start = hi;
            self.domain_end = lo;
        } else {
            self.domain_start = lo;
            self.domain_end = hi;
        }
        self
    }

    /// Maps a domain value to pixel space. Out-of-domain values saturate at
    /// the range edges when clamping is enabled and extrapolate otherwise.
    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "mapped value must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return Ok(self.range_start);
        }

        let mut t = (value - self.domain_start) / span;
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        Ok(self.range_start + t * (self.range_end - self.range_start))
    }

    /// Tick values at 1/2/5-ladder multiples inside the domain, in domain
    /// order from the lower endpoint.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        let (lo, hi) = sorted_pair(self.domain_start, self.domain_end);
        let span = hi - lo;
        if span == 0.0 {
            return vec![lo];
        }

        let step = nice_step(span / count as f64);
        let start = (lo / step).ceil() * step;
        let tolerance = step * 1e-6;

        let mut ticks = Vec::new();
        let mut index = 0_usize;
        loop {
            // Index-based stepping avoids accumulated floating point drift.
            let value = start + step * index as f64;
            if value > hi + tolerance {
                break;
            }
            ticks.push(value.clamp(lo, hi));
            index += 1;
        }
        ticks
    }
}

fn sorted_pair(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Smallest value of the form `{1,2,5,10} * 10^k` that is >= `raw`.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10.0_f64.powf(raw.abs().log10().floor());
    for multiplier in [1.0, 2.0, 5.0, 10.0] {
        let candidate = multiplier * magnitude;
        if candidate >= raw.abs() {
            return candidate;
        }
    }
    magnitude * 10.0
}
