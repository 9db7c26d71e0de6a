use indexmap::IndexMap;
use serde::Serialize;

use crate::core::SeriesFrame;
use crate::error::{ChartError, ChartResult};
use crate::render::style::{
    AXIS_TICK_COLOR, BENCHMARK_BORDER, BENCHMARK_BORDER_WIDTH, BENCHMARK_DRAW_ORDER,
    INDEX_AXIS_ID, LEGEND_BOX_WIDTH, LEGEND_FONT_SIZE, LINE_TENSION, PRICE_AXIS_ID,
    PRICE_BORDER, PRICE_BORDER_WIDTH, PRICE_DRAW_ORDER, PRICE_FILL, PRICE_GRID_COLOR,
    PRICE_GRID_DASH, TOOLTIP_BACKGROUND, TOOLTIP_BORDER, TOOLTIP_TEXT, VOLUME_AXIS_ID,
    VOLUME_BAR_PERCENTAGE, VOLUME_DRAW_ORDER, VOLUME_FILL, X_AXIS_ID,
};
use crate::render::{Color, SeriesRole, TooltipFormat};

/// Dataset positions inside [`ChartData::datasets`].
pub const VOLUME_DATASET_INDEX: usize = 0;
pub const PRICE_DATASET_INDEX: usize = 1;
pub const BENCHMARK_DATASET_INDEX: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    #[serde(skip)]
    pub role: SeriesRole,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub data: Vec<Option<f64>>,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_gaps: Option<bool>,
    pub order: u8,
}

impl DatasetConfig {
    fn line(role: SeriesRole, label: &str, y_axis_id: &str, data: Vec<Option<f64>>) -> Self {
        Self {
            role,
            label: label.to_owned(),
            kind: SeriesKind::Line,
            data,
            y_axis_id: y_axis_id.to_owned(),
            background_color: None,
            border_color: None,
            border_width: None,
            bar_percentage: None,
            tension: Some(LINE_TENSION),
            point_radius: Some(0.0),
            fill: Some(false),
            span_gaps: None,
            order: 0,
        }
    }

    fn volume(data: Vec<Option<f64>>) -> Self {
        Self {
            role: SeriesRole::Volume,
            label: "Volume".to_owned(),
            kind: SeriesKind::Bar,
            data,
            y_axis_id: VOLUME_AXIS_ID.to_owned(),
            background_color: Some(VOLUME_FILL),
            border_color: None,
            border_width: None,
            bar_percentage: Some(VOLUME_BAR_PERCENTAGE),
            tension: None,
            point_radius: None,
            fill: None,
            span_gaps: None,
            order: VOLUME_DRAW_ORDER,
        }
    }

    fn price(data: Vec<Option<f64>>) -> Self {
        Self {
            background_color: Some(PRICE_FILL),
            border_color: Some(PRICE_BORDER),
            border_width: Some(PRICE_BORDER_WIDTH),
            fill: Some(true),
            order: PRICE_DRAW_ORDER,
            ..Self::line(SeriesRole::Price, "Price", PRICE_AXIS_ID, data)
        }
    }

    fn benchmark(label: &str, data: Vec<Option<f64>>) -> Self {
        Self {
            border_color: Some(BENCHMARK_BORDER),
            border_width: Some(BENCHMARK_BORDER_WIDTH),
            span_gaps: Some(true),
            order: BENCHMARK_DRAW_ORDER,
            ..Self::line(SeriesRole::Benchmark, label, INDEX_AXIS_ID, data)
        }
    }
}

/// Labels plus datasets; the part of a chart replaced on every range change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetConfig>,
}

impl ChartData {
    /// Swaps in a new window by dataset position, keeping dataset styling.
    ///
    /// The benchmark slot is only written when the chart was built with one.
    pub fn replace_series(&mut self, frame: &SeriesFrame) {
        self.labels.clone_from(&frame.labels);
        if let Some(volume) = self.datasets.get_mut(VOLUME_DATASET_INDEX) {
            volume.data.clone_from(&frame.volumes);
        }
        if let Some(price) = self.datasets.get_mut(PRICE_DATASET_INDEX) {
            price.data.clone_from(&frame.prices);
        }
        if let Some(benchmark) = self.datasets.get_mut(BENCHMARK_DATASET_INDEX) {
            benchmark.data.clone_from(&frame.index_prices);
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for dataset in &self.datasets {
            if !dataset.data.is_empty() && dataset.data.len() != self.labels.len() {
                return Err(ChartError::InvalidData(format!(
                    "dataset `{}` has {} samples for {} labels",
                    dataset.label,
                    dataset.data.len(),
                    self.labels.len()
                )));
            }
            for color in [dataset.background_color, dataset.border_color]
                .into_iter()
                .flatten()
            {
                color.validate()?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<[u8; 2]>,
}

impl GridConfig {
    const HIDDEN: Self = Self {
        display: false,
        color: None,
        border_dash: None,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickConfig {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks_limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleConfig {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisPosition>,
    /// Hidden axes still scale their datasets.
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub grid: GridConfig,
    pub ticks: TickConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub use_point_style: bool,
    pub box_width: u32,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendConfig {
    pub display: bool,
    pub position: &'static str,
    pub align: &'static str,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub title_color: Color,
    pub body_color: Color,
    /// Stands in for the JS label callback.
    #[serde(skip)]
    pub format: TooltipFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginsConfig {
    pub legend: LegendConfig,
    pub tooltip: TooltipConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionConfig {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub interaction: InteractionConfig,
    pub plugins: PluginsConfig,
    pub scales: IndexMap<String, ScaleConfig>,
}

/// Declarative description of the price/volume chart handed to a backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Builds the volume + price (+ benchmark) chart for one window.
    ///
    /// The benchmark dataset is only added when `frame` carries index values.
    #[must_use]
    pub fn price_volume(frame: &SeriesFrame, tooltip: TooltipFormat, x_max_ticks: u32) -> Self {
        let mut datasets = vec![
            DatasetConfig::volume(frame.volumes.clone()),
            DatasetConfig::price(frame.prices.clone()),
        ];
        if frame.has_index() {
            datasets.push(DatasetConfig::benchmark(
                &tooltip.benchmark_label,
                frame.index_prices.clone(),
            ));
        }

        Self {
            data: ChartData {
                labels: frame.labels.clone(),
                datasets,
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                interaction: InteractionConfig {
                    mode: "index",
                    intersect: false,
                },
                plugins: PluginsConfig {
                    legend: LegendConfig {
                        display: true,
                        position: "top",
                        align: "end",
                        labels: LegendLabels {
                            use_point_style: true,
                            box_width: LEGEND_BOX_WIDTH,
                            font_size: LEGEND_FONT_SIZE,
                        },
                    },
                    tooltip: TooltipConfig {
                        background_color: TOOLTIP_BACKGROUND,
                        border_color: TOOLTIP_BORDER,
                        border_width: 1.0,
                        title_color: TOOLTIP_TEXT,
                        body_color: TOOLTIP_TEXT,
                        format: tooltip,
                    },
                },
                scales: price_volume_scales(x_max_ticks),
            },
        }
    }

    /// Tooltip lines for the sample at `index`, in dataset order.
    #[must_use]
    pub fn tooltip_lines(&self, index: usize) -> Vec<String> {
        let format = &self.options.plugins.tooltip.format;
        self.data
            .datasets
            .iter()
            .filter_map(|dataset| format.line(dataset.role, dataset.data.get(index).copied()?))
            .collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.data.validate()?;
        for dataset in &self.data.datasets {
            if !self.options.scales.contains_key(&dataset.y_axis_id) {
                return Err(ChartError::InvalidData(format!(
                    "dataset `{}` references unknown axis `{}`",
                    dataset.label, dataset.y_axis_id
                )));
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn price_volume_scales(x_max_ticks: u32) -> IndexMap<String, ScaleConfig> {
    let mut scales = IndexMap::with_capacity(4);
    scales.insert(
        X_AXIS_ID.to_owned(),
        ScaleConfig {
            kind: None,
            position: None,
            display: true,
            begin_at_zero: None,
            grid: GridConfig::HIDDEN,
            ticks: TickConfig {
                display: true,
                color: Some(AXIS_TICK_COLOR),
                max_ticks_limit: Some(x_max_ticks),
            },
        },
    );
    scales.insert(
        VOLUME_AXIS_ID.to_owned(),
        ScaleConfig {
            kind: Some("linear"),
            position: Some(AxisPosition::Left),
            display: true,
            begin_at_zero: Some(true),
            grid: GridConfig::HIDDEN,
            ticks: TickConfig {
                display: false,
                color: None,
                max_ticks_limit: None,
            },
        },
    );
    scales.insert(
        PRICE_AXIS_ID.to_owned(),
        ScaleConfig {
            kind: Some("linear"),
            position: Some(AxisPosition::Right),
            display: true,
            begin_at_zero: None,
            grid: GridConfig {
                display: true,
                color: Some(PRICE_GRID_COLOR),
                border_dash: Some(PRICE_GRID_DASH),
            },
            ticks: TickConfig {
                display: true,
                color: Some(AXIS_TICK_COLOR),
                max_ticks_limit: None,
            },
        },
    );
    scales.insert(
        INDEX_AXIS_ID.to_owned(),
        ScaleConfig {
            kind: Some("linear"),
            position: Some(AxisPosition::Right),
            display: false,
            begin_at_zero: None,
            grid: GridConfig::HIDDEN,
            ticks: TickConfig {
                display: true,
                color: None,
                max_ticks_limit: None,
            },
        },
    );
    scales
}
