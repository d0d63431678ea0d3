//! waterfall-rs: deterministic waterfall chart layout engine.
//!
//! This crate computes scale and geometry layout for waterfall charts
//! (sequential cumulative bars with connector lines) and materializes
//! backend-agnostic render primitives so drawing backends stay isolated
//! from chart domain logic.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{WaterfallChart, WaterfallConfig};
pub use error::{ChartError, ChartResult};
