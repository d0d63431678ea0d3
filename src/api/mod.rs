mod chart;
mod config;
mod features;
mod format;

pub use chart::WaterfallChart;
pub use config::{WaterfallConfig, WaterfallStyle};
pub use format::format_value;
