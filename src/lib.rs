//! range-chart: headless price/volume chart widget with date-range presets.
//!
//! The crate splits the widget into a data core (range presets, slicing), a
//! render layer (declarative chart config, tooltip text, backend contract) and
//! a component API (widget, page discovery, event wiring).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Bootstrapper, RangeFilteredChart, WidgetConfig};
pub use error::{ChartError, ChartResult};
