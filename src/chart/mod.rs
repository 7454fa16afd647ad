//! Chart construction: extents, scales, axes and the two renderers.

pub mod axis;
pub mod line;
pub mod minmax;
pub mod scale;
pub mod scatter;

pub use line::{LineChartLayout, LineChartRenderer};
pub use scatter::{ScatterChartRenderer, ScatterLayout};
