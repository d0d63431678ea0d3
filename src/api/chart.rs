use crate::api::WaterfallConfig;
use crate::api::features::{
    BarsFeature, ChartFeature, ConnectorsFeature, FeatureContext, LabelsFeature, XAxisFeature,
    YAxisFeature,
};
use crate::core::{
    AxisScale, BandScale, LinearScale, Orientation, ScaleLayout, Series, Viewport, resolve_scales,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

/// Waterfall chart orchestrator.
///
/// Owns the configuration and the x/y scale slots, and runs the fixed
/// feature pipeline (bars, connectors, column labels, x axis, y axis) to
/// materialize deterministic primitives for one draw pass. Renders are
/// synchronous single passes; `&mut self` makes them single-flight by
/// construction.
pub struct WaterfallChart {
    config: WaterfallConfig,
    x: Option<AxisScale>,
    y: Option<AxisScale>,
    features: Vec<Box<dyn ChartFeature>>,
}

impl WaterfallChart {
    pub fn new(config: WaterfallConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            x: None,
            y: None,
            features: vec![
                Box::new(BarsFeature),
                Box::new(ConnectorsFeature),
                Box::new(LabelsFeature),
                Box::new(XAxisFeature),
                Box::new(YAxisFeature),
            ],
        })
    }

    #[must_use]
    pub fn config(&self) -> &WaterfallConfig {
        &self.config
    }

    /// Pre-sets the x axis slot; the configurator will reuse it instead of
    /// deriving a scale from data.
    #[must_use]
    pub fn with_x_scale(mut self, scale: AxisScale) -> Self {
        self.x = Some(scale);
        self
    }

    /// Pre-sets the y axis slot.
    #[must_use]
    pub fn with_y_scale(mut self, scale: AxisScale) -> Self {
        self.y = Some(scale);
        self
    }

    #[must_use]
    pub fn x_scale(&self) -> Option<&AxisScale> {
        self.x.as_ref()
    }

    #[must_use]
    pub fn y_scale(&self) -> Option<&AxisScale> {
        self.y.as_ref()
    }

    /// Empties both scale slots. This is the only way band domains are
    /// recomputed once set.
    pub fn clear_scales(&mut self) {
        self.x = None;
        self.y = None;
    }

    /// Switches layout mode and clears both scale slots, since the band and
    /// linear roles swap axes on orientation change.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.config.orientation != orientation {
            self.config.orientation = orientation;
            self.clear_scales();
        }
    }

    /// Updates the viewport. The linear scale tracks the new dimensions on
    /// the next render; a set band scale keeps its pixel bands until cleared.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.config.viewport = viewport;
        Ok(())
    }

    fn scale_layout(&self) -> ScaleLayout {
        ScaleLayout {
            viewport: self.config.viewport,
            margin: self.config.margin,
            orientation: self.config.orientation,
            band_padding: self.config.band_padding,
        }
    }

    /// Validates the data and resolves both axis scales, computing whichever
    /// slots are still unset and re-ranging the value scale.
    pub fn configure(&mut self, data: &[Series]) -> ChartResult<()> {
        let layout = self.scale_layout();
        let (x, y) = resolve_scales(data, &layout, self.x.clone(), self.y.clone())?;
        tracing::debug!(
            orientation = ?layout.orientation,
            series = data.len(),
            "configured waterfall scales"
        );
        self.x = Some(x);
        self.y = Some(y);
        Ok(())
    }

    /// Configures scales, then materializes all features into one frame.
    pub fn build_render_frame(&mut self, data: &[Series]) -> ChartResult<RenderFrame> {
        self.configure(data)?;
        self.materialize(data)
    }

    /// Builds the frame and hands it to the renderer backend.
    pub fn render<R: Renderer>(
        &mut self,
        renderer: &mut R,
        data: &[Series],
    ) -> ChartResult<RenderFrame> {
        let frame = self.build_render_frame(data)?;
        renderer.render(&frame)?;
        Ok(frame)
    }

    fn resolved_roles(&self) -> ChartResult<(&BandScale, &LinearScale)> {
        let x = self.x.as_ref().ok_or_else(unconfigured)?;
        let y = self.y.as_ref().ok_or_else(unconfigured)?;
        match self.config.orientation {
            Orientation::Vertical => Ok((x.as_band()?, y.as_linear()?)),
            Orientation::Horizontal => Ok((y.as_band()?, x.as_linear()?)),
        }
    }

    fn materialize(&self, data: &[Series]) -> ChartResult<RenderFrame> {
        let (band, linear) = self.resolved_roles()?;
        let (plot_width, plot_height) = self.scale_layout().plot_size()?;
        let ctx = FeatureContext {
            data,
            orientation: self.config.orientation,
            band,
            linear,
            config: &self.config,
            plot_width,
            plot_height,
            offset_x: self.config.margin.left,
            offset_y: self.config.margin.top,
        };

        let mut frame = RenderFrame::new(self.config.viewport);
        for feature in &self.features {
            tracing::debug!(feature = feature.name(), "rendering feature");
            feature.render(&ctx, &mut frame)?;
        }
        Ok(frame)
    }
}

fn unconfigured() -> ChartError {
    ChartError::InvalidData("chart scales are not configured".to_owned())
}
