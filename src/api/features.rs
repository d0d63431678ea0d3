use crate::api::WaterfallConfig;
use crate::api::format::format_value;
use crate::core::{
    BandScale, LinearScale, Orientation, Series, project_waterfall_bars,
    project_waterfall_connectors, project_waterfall_labels,
};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Resolved inputs one visual feature renders against.
///
/// Scales are resolved to their band/linear roles before the pipeline runs,
/// so features never re-check which axis slot holds which scale kind.
pub(crate) struct FeatureContext<'a> {
    pub data: &'a [Series],
    pub orientation: Orientation,
    pub band: &'a BandScale,
    pub linear: &'a LinearScale,
    pub config: &'a WaterfallConfig,
    pub plot_width: f64,
    pub plot_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// One visual feature of the chart, materializing its primitives into the
/// shared frame. Features run in a fixed registration order.
pub(crate) trait ChartFeature {
    fn name(&self) -> &'static str;
    fn render(&self, ctx: &FeatureContext<'_>, frame: &mut RenderFrame) -> ChartResult<()>;
}

pub(crate) struct BarsFeature;

impl ChartFeature for BarsFeature {
    fn name(&self) -> &'static str {
        "bars"
    }

    fn render(&self, ctx: &FeatureContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let bars = project_waterfall_bars(ctx.data, ctx.orientation, ctx.band, ctx.linear)?;
        for bar in bars {
            frame.rects.push(RectPrimitive::new(
                bar.x + ctx.offset_x,
                bar.y + ctx.offset_y,
                bar.width,
                bar.height,
                bar.class,
            ));
        }
        Ok(())
    }
}

pub(crate) struct ConnectorsFeature;

impl ChartFeature for ConnectorsFeature {
    fn name(&self) -> &'static str {
        "connectors"
    }

    fn render(&self, ctx: &FeatureContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let segments =
            project_waterfall_connectors(ctx.data, ctx.orientation, ctx.band, ctx.linear)?;
        for segment in segments {
            frame.lines.push(LinePrimitive::new(
                segment.x1 + ctx.offset_x,
                segment.y1 + ctx.offset_y,
                segment.x2 + ctx.offset_x,
                segment.y2 + ctx.offset_y,
                ctx.config.style.connector_stroke_px,
                "connector",
            ));
        }
        Ok(())
    }
}

pub(crate) struct LabelsFeature;

impl ChartFeature for LabelsFeature {
    fn name(&self) -> &'static str {
        "column-labels"
    }

    fn render(&self, ctx: &FeatureContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let labels = project_waterfall_labels(
            ctx.data,
            ctx.orientation,
            ctx.band,
            ctx.linear,
            ctx.config.label_gap_px,
        )?;
        let h_align = match ctx.orientation {
            Orientation::Vertical => TextHAlign::Center,
            Orientation::Horizontal => TextHAlign::Left,
        };
        for label in labels {
            frame.texts.push(TextPrimitive::new(
                format_value(label.value),
                label.x + ctx.offset_x,
                label.y + ctx.offset_y,
                ctx.config.style.label_font_px,
                h_align,
                "column-label",
            ));
        }
        Ok(())
    }
}

/// Axis along the bottom edge of the plot: band ticks in vertical layouts,
/// linear value ticks in horizontal ones.
pub(crate) struct XAxisFeature;

impl ChartFeature for XAxisFeature {
    fn name(&self) -> &'static str {
        "x-axis"
    }

    fn render(&self, ctx: &FeatureContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let style = ctx.config.style;
        let baseline = ctx.offset_y + ctx.plot_height;
        frame.lines.push(LinePrimitive::new(
            ctx.offset_x,
            baseline,
            ctx.offset_x + ctx.plot_width,
            baseline,
            style.axis_stroke_px,
            "x axis",
        ));

        let label_y = baseline + style.axis_tick_len_px + style.axis_label_gap_px + style.axis_font_px;
        match ctx.orientation {
            Orientation::Vertical => {
                for key in ctx.band.domain() {
                    let center = ctx.offset_x + ctx.band.center(key)?;
                    frame.lines.push(LinePrimitive::new(
                        center,
                        baseline,
                        center,
                        baseline + style.axis_tick_len_px,
                        style.axis_stroke_px,
                        "x axis tick",
                    ));
                    frame.texts.push(TextPrimitive::new(
                        key,
                        center,
                        label_y,
                        style.axis_font_px,
                        TextHAlign::Center,
                        "x axis label",
                    ));
                }
            }
            Orientation::Horizontal => {
                for tick in ctx.linear.ticks(style.axis_tick_count) {
                    let position = ctx.offset_x + ctx.linear.map(tick)?;
                    frame.lines.push(LinePrimitive::new(
                        position,
                        baseline,
                        position,
                        baseline + style.axis_tick_len_px,
                        style.axis_stroke_px,
                        "x axis tick",
                    ));
                    frame.texts.push(TextPrimitive::new(
                        format_value(tick),
                        position,
                        label_y,
                        style.axis_font_px,
                        TextHAlign::Center,
                        "x axis label",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Axis along the left edge of the plot: linear value ticks in vertical
/// layouts, band ticks in horizontal ones.
pub(crate) struct YAxisFeature;

impl ChartFeature for YAxisFeature {
    fn name(&self) -> &'static str {
        "y-axis"
    }

    fn render(&self, ctx: &FeatureContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let style = ctx.config.style;
        let edge = ctx.offset_x;
        frame.lines.push(LinePrimitive::new(
            edge,
            ctx.offset_y,
            edge,
            ctx.offset_y + ctx.plot_height,
            style.axis_stroke_px,
            "y axis",
        ));

        let label_x = edge - style.axis_tick_len_px - style.axis_label_gap_px;
        match ctx.orientation {
            Orientation::Vertical => {
                for tick in ctx.linear.ticks(style.axis_tick_count) {
                    let position = ctx.offset_y + ctx.linear.map(tick)?;
                    frame.lines.push(LinePrimitive::new(
                        edge - style.axis_tick_len_px,
                        position,
                        edge,
                        position,
                        style.axis_stroke_px,
                        "y axis tick",
                    ));
                    frame.texts.push(TextPrimitive::new(
                        format_value(tick),
                        label_x,
                        position,
                        style.axis_font_px,
                        TextHAlign::Right,
                        "y axis label",
                    ));
                }
            }
            Orientation::Horizontal => {
                for key in ctx.band.domain() {
                    let center = ctx.offset_y + ctx.band.center(key)?;
                    frame.lines.push(LinePrimitive::new(
                        edge - style.axis_tick_len_px,
                        center,
                        edge,
                        center,
                        style.axis_stroke_px,
                        "y axis tick",
                    ));
                    frame.texts.push(TextPrimitive::new(
                        key,
                        label_x,
                        center,
                        style.axis_font_px,
                        TextHAlign::Right,
                        "y axis label",
                    ));
                }
            }
        }
        Ok(())
    }
}
