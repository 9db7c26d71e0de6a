mod config;
mod null_backend;
mod primitives;
pub mod style;
mod tooltip;

pub use config::{
    AxisPosition, BENCHMARK_DATASET_INDEX, ChartConfig, ChartData, ChartOptions, DatasetConfig,
    GridConfig, InteractionConfig, LegendConfig, LegendLabels, PRICE_DATASET_INDEX,
    PluginsConfig, ScaleConfig, SeriesKind, TickConfig, TooltipConfig, VOLUME_DATASET_INDEX,
};
pub use null_backend::{NullBackend, NullChart};
pub use primitives::Color;
pub use tooltip::{NumberGrouping, SeriesRole, TooltipFormat, format_grouped_number};

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

/// Opaque id of one live chart inside a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartHandle(pub u64);

/// Contract implemented by any chart drawing backend.
///
/// Backends receive fully materialized configs so chart domain logic stays
/// out of drawing code. `update` mutates an existing chart in place.
pub trait ChartBackend {
    fn create(&mut self, canvas_id: &str, config: &ChartConfig) -> ChartResult<ChartHandle>;
    fn update(&mut self, handle: ChartHandle, data: &ChartData) -> ChartResult<()>;
    fn destroy(&mut self, handle: ChartHandle) -> ChartResult<()>;
}
