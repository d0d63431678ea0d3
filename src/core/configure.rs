use serde::{Deserialize, Serialize};

use crate::core::{BandScale, LinearScale, Margin, Orientation, Series, Viewport, validate_series};
use crate::error::{ChartError, ChartResult};

/// A chart axis slot: either the categorical band scale or the value scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisScale {
    Band(BandScale),
    Linear(LinearScale),
}

impl AxisScale {
    pub fn as_band(&self) -> ChartResult<&BandScale> {
        match self {
            Self::Band(scale) => Ok(scale),
            Self::Linear(_) => Err(ChartError::InvalidData(
                "category axis slot holds a linear scale".to_owned(),
            )),
        }
    }

    pub fn as_linear(&self) -> ChartResult<&LinearScale> {
        match self {
            Self::Linear(scale) => Ok(scale),
            Self::Band(_) => Err(ChartError::InvalidData(
                "value axis slot holds a band scale".to_owned(),
            )),
        }
    }
}

/// Dimensions and layout mode the scale configurator works against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleLayout {
    pub viewport: Viewport,
    pub margin: Margin,
    pub orientation: Orientation,
    pub band_padding: f64,
}

impl ScaleLayout {
    /// Plot-area size after margins, rejected when degenerate.
    pub fn plot_size(&self) -> ChartResult<(f64, f64)> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margin.validate()?;

        let width = f64::from(self.viewport.width) - self.margin.left - self.margin.right;
        let height = f64::from(self.viewport.height) - self.margin.top - self.margin.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margins leave no plot area ({width}x{height})"
            )));
        }
        Ok((width, height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    X,
    Y,
}

/// Pixel bounds for one dimension. The y bounds are reversed in vertical
/// orientation because screen y grows downward while chart values grow up.
fn range_bounds(dimension: Dimension, layout: &ScaleLayout) -> ChartResult<(f64, f64)> {
    let (width, height) = layout.plot_size()?;
    Ok(match dimension {
        Dimension::X => (0.0, width),
        Dimension::Y => match layout.orientation {
            Orientation::Vertical => (height, 0.0),
            Orientation::Horizontal => (0.0, height),
        },
    })
}

/// Min/max of the stacked running total (`y0 + y`) across all points, with
/// the lower bound pulled to zero. Waterfall bars always show movement
/// relative to a zero baseline.
#[must_use]
pub fn value_extent(data: &[Series]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for series in data {
        for point in &series.values {
            let total = point.total();
            min = min.min(total);
            max = max.max(total);
        }
    }
    (min.min(0.0), max)
}

fn resolve_band(
    existing: Option<AxisScale>,
    data: &[Series],
    bounds: (f64, f64),
    padding: f64,
) -> ChartResult<AxisScale> {
    match existing {
        // A pre-set band slot is reused untouched; bands are only
        // recomputed when the caller clears the slot.
        Some(AxisScale::Band(scale)) => Ok(AxisScale::Band(scale)),
        Some(AxisScale::Linear(_)) => Err(ChartError::InvalidData(
            "category axis slot was pre-set with a linear scale".to_owned(),
        )),
        None => {
            let keys = data.iter().map(|series| series.key.as_str());
            Ok(AxisScale::Band(BandScale::new(keys, bounds, padding)?))
        }
    }
}

fn resolve_linear(
    existing: Option<AxisScale>,
    data: &[Series],
    bounds: (f64, f64),
) -> ChartResult<AxisScale> {
    let base = match existing {
        Some(AxisScale::Linear(scale)) => scale,
        Some(AxisScale::Band(_)) => {
            return Err(ChartError::InvalidData(
                "value axis slot was pre-set with a band scale".to_owned(),
            ));
        }
        None => {
            let extent = value_extent(data);
            tracing::debug!(min = extent.0, max = extent.1, "computed value domain");
            LinearScale::new(extent)?
        }
    };

    // Range, clamp and nice are re-applied every pass so the scale tracks
    // the current chart dimensions even when the domain is reused.
    Ok(AxisScale::Linear(
        base.with_range(bounds)?.with_clamp(true).nice(),
    ))
}

/// Derives or reuses the x/y axis scales for one render pass.
///
/// Slots that already hold a scale keep their domain: bands are reused
/// untouched, linear scales get range/clamp/nice re-applied. Empty slots are
/// computed from the data. Returns the resolved pair; the chart owns the
/// result.
pub fn resolve_scales(
    data: &[Series],
    layout: &ScaleLayout,
    x: Option<AxisScale>,
    y: Option<AxisScale>,
) -> ChartResult<(AxisScale, AxisScale)> {
    validate_series(data)?;

    let x_bounds = range_bounds(Dimension::X, layout)?;
    let y_bounds = range_bounds(Dimension::Y, layout)?;

    match layout.orientation {
        Orientation::Vertical => {
            let x = resolve_band(x, data, x_bounds, layout.band_padding)?;
            let y = resolve_linear(y, data, y_bounds)?;
            Ok((x, y))
        }
        Orientation::Horizontal => {
            let x = resolve_linear(x, data, x_bounds)?;
            let y = resolve_band(y, data, y_bounds, layout.band_padding)?;
            Ok((x, y))
        }
    }
}
