use serde::{Deserialize, Serialize};

use crate::core::{Margin, Orientation, Viewport};
use crate::error::{ChartError, ChartResult};

/// Stroke widths, font sizes and axis metrics used when materializing
/// primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterfallStyle {
    pub connector_stroke_px: f64,
    pub axis_stroke_px: f64,
    pub axis_tick_len_px: f64,
    pub axis_label_gap_px: f64,
    pub label_font_px: f64,
    pub axis_font_px: f64,
    pub axis_tick_count: usize,
}

impl Default for WaterfallStyle {
    fn default() -> Self {
        Self {
            connector_stroke_px: 1.0,
            axis_stroke_px: 1.0,
            axis_tick_len_px: 6.0,
            axis_label_gap_px: 8.0,
            label_font_px: 12.0,
            axis_font_px: 11.0,
            axis_tick_count: 6,
        }
    }
}

impl WaterfallStyle {
    fn validate(self) -> ChartResult<()> {
        for (field, value) in [
            ("connector_stroke_px", self.connector_stroke_px),
            ("axis_stroke_px", self.axis_stroke_px),
            ("axis_tick_len_px", self.axis_tick_len_px),
            ("axis_label_gap_px", self.axis_label_gap_px),
            ("label_font_px", self.label_font_px),
            ("axis_font_px", self.axis_font_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style field `{field}` must be finite and > 0"
                )));
            }
        }
        if self.axis_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "style field `axis_tick_count` must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterfallConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default = "default_label_gap_px")]
    pub label_gap_px: f64,
    #[serde(default)]
    pub style: WaterfallStyle,
}

fn default_band_padding() -> f64 {
    0.3
}

fn default_label_gap_px() -> f64 {
    10.0
}

impl WaterfallConfig {
    /// Creates a vertical chart config with default paddings and style.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin: Margin::default(),
            orientation: Orientation::default(),
            band_padding: default_band_padding(),
            label_gap_px: default_label_gap_px(),
            style: WaterfallStyle::default(),
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }

    #[must_use]
    pub fn with_label_gap(mut self, label_gap_px: f64) -> Self {
        self.label_gap_px = label_gap_px;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: WaterfallStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margin.validate()?;
        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !self.label_gap_px.is_finite() || self.label_gap_px < 0.0 {
            return Err(ChartError::InvalidData(
                "label gap must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }
}
