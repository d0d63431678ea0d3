use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel insets between the viewport edges and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Layout mode: which axis carries the categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Categories on x, values grow upward on y.
    #[default]
    Vertical,
    /// Categories on y, values grow rightward on x.
    Horizontal,
}

/// One stacked observation.
///
/// Stacking always stores its results in `y0`/`y`, even when the value axis
/// is visually x in horizontal layouts. `y0 + y` is the running total at this
/// point; `y0` is exactly `0.0` at subtotal markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackedPoint {
    /// Cumulative baseline the bar starts from.
    pub y0: f64,
    /// Delta contributed by this bar.
    pub y: f64,
    /// Raw display value shown on the bar label.
    pub value: f64,
}

impl StackedPoint {
    #[must_use]
    pub const fn new(y0: f64, y: f64, value: f64) -> Self {
        Self { y0, y, value }
    }

    /// Running total after this point.
    #[must_use]
    pub fn total(self) -> f64 {
        self.y0 + self.y
    }
}

/// A named group of stacked points. The ordered list of series keys forms the
/// categorical axis domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub values: Vec<StackedPoint>,
}

impl Series {
    #[must_use]
    pub fn new(key: impl Into<String>, values: Vec<StackedPoint>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }
}

/// Rejects data that would otherwise propagate NaN into pixel geometry.
pub fn validate_series(data: &[Series]) -> ChartResult<()> {
    if data.is_empty() {
        return Err(ChartError::EmptyData);
    }

    for (index, series) in data.iter().enumerate() {
        if series.key.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "series {index} has an empty key"
            )));
        }
        if series.values.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "series `{}` has no points",
                series.key
            )));
        }
        if data[..index].iter().any(|prior| prior.key == series.key) {
            return Err(ChartError::InvalidData(format!(
                "duplicate series key `{}`",
                series.key
            )));
        }
        for point in &series.values {
            if !point.y0.is_finite() || !point.y.is_finite() || !point.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` contains a non-finite point",
                    series.key
                )));
            }
        }
    }

    Ok(())
}
