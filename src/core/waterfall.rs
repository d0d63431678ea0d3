use serde::{Deserialize, Serialize};

use crate::core::{BandScale, LinearScale, Orientation, Series, StackedPoint};
use crate::error::ChartResult;

/// Visual role of one bar within the waterfall sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarDirection {
    Positive,
    Negative,
    Subtotal,
}

impl BarDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Subtotal => "subtotal",
        }
    }
}

/// Classifies a bar by its position in the sequence and its baseline.
///
/// A bar past the first that starts from a zero baseline is a running
/// subtotal marker; the first bar is classified by the sign of its delta
/// even when `y0 == 0`.
#[must_use]
pub fn classify(index: usize, point: &StackedPoint) -> BarDirection {
    if index > 0 && point.y0 == 0.0 {
        BarDirection::Subtotal
    } else if point.y > 0.0 {
        BarDirection::Positive
    } else {
        BarDirection::Negative
    }
}

fn class_tokens(index: usize, direction: BarDirection, key: &str) -> String {
    format!("bar fill item{index} {} {key}", direction.as_str())
}

/// Deterministic bar geometry in plot-local pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub direction: BarDirection,
    pub class: String,
}

/// Label geometry anchored just outside the bar's outer edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLabel {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Connector line between two consecutive bars, at the running-total level
/// the next bar starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectorSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects stacked series into waterfall bars.
///
/// A stacked segment's data-space bounds are `y0` and `y0 + y`; which one is
/// the outer (farther from zero) edge depends on the sign of `y`. Subtracting
/// `min(0, y)` (vertical) or `max(0, y)` (horizontal) from the total selects
/// the correct bound without branching on sign.
pub fn project_waterfall_bars(
    data: &[Series],
    orientation: Orientation,
    band: &BandScale,
    linear: &LinearScale,
) -> ChartResult<Vec<WaterfallBar>> {
    let mut bars = Vec::with_capacity(data.len());
    let mut index = 0_usize;
    for series in data {
        for point in &series.values {
            let total = point.total();
            let extent = (linear.map(point.y0)? - linear.map(total)?).abs();
            let direction = classify(index, point);

            let (x, y, width, height) = match orientation {
                Orientation::Vertical => {
                    let outer = total - point.y.min(0.0);
                    (
                        band.position(&series.key)?,
                        linear.map(outer)?,
                        band.band_width(),
                        extent,
                    )
                }
                Orientation::Horizontal => {
                    let leading = total - point.y.max(0.0);
                    (
                        linear.map(leading)?,
                        band.position(&series.key)?,
                        extent,
                        band.band_width(),
                    )
                }
            };

            bars.push(WaterfallBar {
                x,
                y,
                width,
                height,
                direction,
                class: class_tokens(index, direction, &series.key),
            });
            index += 1;
        }
    }

    Ok(bars)
}

/// Projects one label per bar, offset by `gap` pixels outside the outer edge:
/// above the bar in vertical layouts, to the right of it in horizontal ones.
pub fn project_waterfall_labels(
    data: &[Series],
    orientation: Orientation,
    band: &BandScale,
    linear: &LinearScale,
    gap: f64,
) -> ChartResult<Vec<BarLabel>> {
    let mut labels = Vec::with_capacity(data.len());
    for series in data {
        for point in &series.values {
            let total = point.total();
            let lower = total - point.y.max(0.0);
            let extent = (linear.map(point.y0)? - linear.map(total)?).abs();

            let (x, y) = match orientation {
                Orientation::Vertical => (
                    band.center(&series.key)?,
                    linear.map(lower)? - gap - extent,
                ),
                Orientation::Horizontal => (
                    linear.map(lower)? + gap + extent,
                    band.center(&series.key)?,
                ),
            };

            labels.push(BarLabel {
                x,
                y,
                value: point.value,
            });
        }
    }

    Ok(labels)
}

/// Projects the connector between each pair of consecutive bars: a segment at
/// the previous bar's running-total pixel spanning the gap from the trailing
/// edge of the previous band to the leading edge of the current one. The
/// first bar has no connector.
pub fn project_waterfall_connectors(
    data: &[Series],
    orientation: Orientation,
    band: &BandScale,
    linear: &LinearScale,
) -> ChartResult<Vec<ConnectorSegment>> {
    let points: Vec<(&str, &StackedPoint)> = data
        .iter()
        .flat_map(|series| series.values.iter().map(|point| (series.key.as_str(), point)))
        .collect();

    let mut segments = Vec::with_capacity(points.len().saturating_sub(1));
    for pair in points.windows(2) {
        let (prev_key, prev) = pair[0];
        let (next_key, _) = pair[1];
        let level = linear.map(prev.total())?;
        let from = band.position(prev_key)? + band.band_width();
        let to = band.position(next_key)?;

        segments.push(match orientation {
            Orientation::Vertical => ConnectorSegment {
                x1: from,
                y1: level,
                x2: to,
                y2: level,
            },
            Orientation::Horizontal => ConnectorSegment {
                x1: level,
                y1: from,
                x2: level,
                y2: to,
            },
        });
    }

    Ok(segments)
}
