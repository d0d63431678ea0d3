use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Categorical scale mapping ordered keys to equal whole-pixel bands.
///
/// Follows the rounded-band contract: the step between band starts is floored
/// to a whole pixel, the band width is `round(step * (1 - padding))`, inner
/// and outer padding are equal fractions of the step, and the leftover pixels
/// from rounding are centered inside the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    keys: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    step: f64,
    band_width: f64,
    origin: f64,
}

impl BandScale {
    pub fn new<I, K>(keys: I, range: (f64, f64), padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() || range.1 <= range.0 {
            return Err(ChartError::InvalidData(
                "band range must be finite and ascending".to_owned(),
            ));
        }

        let mut domain = IndexSet::new();
        for key in keys {
            let key = key.into();
            if key.is_empty() {
                return Err(ChartError::InvalidData(
                    "band domain keys must not be empty".to_owned(),
                ));
            }
            if !domain.insert(key.clone()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate band domain key `{key}`"
                )));
            }
        }
        if domain.is_empty() {
            return Err(ChartError::EmptyData);
        }

        let span = range.1 - range.0;
        let slots = domain.len() as f64 + padding;
        let step = (span / slots).floor();
        if step < 1.0 {
            return Err(ChartError::InvalidData(format!(
                "band range of {span}px is too small for {} bands",
                domain.len()
            )));
        }
        let band_width = (step * (1.0 - padding)).round();
        let leftover = span - step * slots;
        let origin = range.0 + (leftover / 2.0 + step * padding).round();

        Ok(Self {
            keys: domain,
            range_start: range.0,
            range_end: range.1,
            padding,
            step,
            band_width,
            origin,
        })
    }

    /// Pixel position of the leading edge of the key's band.
    pub fn position(&self, key: &str) -> ChartResult<f64> {
        let index = self
            .keys
            .get_index_of(key)
            .ok_or_else(|| ChartError::UnknownCategory(key.to_owned()))?;
        Ok(self.origin + index as f64 * self.step)
    }

    /// Pixel position of the center of the key's band.
    pub fn center(&self, key: &str) -> ChartResult<f64> {
        Ok(self.position(key)? + self.band_width / 2.0)
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}
