use serde::{Deserialize, Serialize};

use crate::core::{Series, StackedPoint};
use crate::error::{ChartError, ChartResult};

/// One raw row of waterfall input before stacking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum WaterfallEntry {
    /// Additive or subtractive contribution to the running total.
    Delta { key: String, value: f64 },
    /// Cumulative checkpoint: rendered as a bar from zero to the running total.
    Subtotal { key: String },
}

impl WaterfallEntry {
    #[must_use]
    pub fn delta(key: impl Into<String>, value: f64) -> Self {
        Self::Delta {
            key: key.into(),
            value,
        }
    }

    #[must_use]
    pub fn subtotal(key: impl Into<String>) -> Self {
        Self::Subtotal { key: key.into() }
    }
}

/// Computes `y0`/`y` running totals from raw waterfall rows.
///
/// Delta rows start where the previous row ended. Subtotal rows restart from
/// a zero baseline and span the full running total, which is what marks them
/// as subtotals downstream (`y0 == 0` past the first bar).
pub fn stack_waterfall(entries: &[WaterfallEntry]) -> ChartResult<Vec<Series>> {
    if entries.is_empty() {
        return Err(ChartError::EmptyData);
    }

    let mut running = 0.0_f64;
    let mut stacked = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            WaterfallEntry::Delta { key, value } => {
                if !value.is_finite() {
                    return Err(ChartError::InvalidData(format!(
                        "waterfall entry `{key}` has a non-finite value"
                    )));
                }
                stacked.push(Series::new(
                    key.clone(),
                    vec![StackedPoint::new(running, *value, *value)],
                ));
                running += value;
            }
            WaterfallEntry::Subtotal { key } => {
                stacked.push(Series::new(
                    key.clone(),
                    vec![StackedPoint::new(0.0, running, running)],
                ));
            }
        }
    }

    Ok(stacked)
}
