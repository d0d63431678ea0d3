pub mod band_scale;
pub mod configure;
pub mod linear_scale;
pub mod stack;
pub mod types;
pub mod waterfall;

pub use band_scale::BandScale;
pub use configure::{AxisScale, ScaleLayout, resolve_scales, value_extent};
pub use linear_scale::LinearScale;
pub use stack::{WaterfallEntry, stack_waterfall};
pub use types::{Margin, Orientation, Series, StackedPoint, Viewport, validate_series};
pub use waterfall::{
    BarDirection, BarLabel, ConnectorSegment, WaterfallBar, classify, project_waterfall_bars,
    project_waterfall_connectors, project_waterfall_labels,
};
