use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{NumberGrouping, TooltipFormat};

use super::RangeButtonClasses;

/// Host-facing widget configuration.
///
/// Serializable so pages can ship overrides as JSON; every field is optional
/// on input and falls back to the stock price/volume widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_canvas_id")]
    pub canvas_id: String,
    #[serde(default = "default_data_element_id")]
    pub data_element_id: String,
    #[serde(default = "default_controls_container_id")]
    pub controls_container_id: String,
    #[serde(default = "default_currency_glyph")]
    pub currency_glyph: String,
    #[serde(default = "default_benchmark_label")]
    pub benchmark_label: String,
    #[serde(default)]
    pub number_grouping: NumberGrouping,
    #[serde(default = "default_x_axis_max_ticks")]
    pub x_axis_max_ticks: u32,
    #[serde(default)]
    pub button_classes: RangeButtonClasses,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            canvas_id: default_canvas_id(),
            data_element_id: default_data_element_id(),
            controls_container_id: default_controls_container_id(),
            currency_glyph: default_currency_glyph(),
            benchmark_label: default_benchmark_label(),
            number_grouping: NumberGrouping::default(),
            x_axis_max_ticks: default_x_axis_max_ticks(),
            button_classes: RangeButtonClasses::default(),
        }
    }
}

impl WidgetConfig {
    /// Sets canvas/data/controls element ids.
    #[must_use]
    pub fn with_element_ids(
        mut self,
        canvas_id: impl Into<String>,
        data_element_id: impl Into<String>,
        controls_container_id: impl Into<String>,
    ) -> Self {
        self.canvas_id = canvas_id.into();
        self.data_element_id = data_element_id.into();
        self.controls_container_id = controls_container_id.into();
        self
    }

    #[must_use]
    pub fn with_currency_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.currency_glyph = glyph.into();
        self
    }

    #[must_use]
    pub fn with_benchmark_label(mut self, label: impl Into<String>) -> Self {
        self.benchmark_label = label.into();
        self
    }

    #[must_use]
    pub fn with_number_grouping(mut self, grouping: NumberGrouping) -> Self {
        self.number_grouping = grouping;
        self
    }

    #[must_use]
    pub fn with_x_axis_max_ticks(mut self, max_ticks: u32) -> Self {
        self.x_axis_max_ticks = max_ticks;
        self
    }

    #[must_use]
    pub fn tooltip_format(&self) -> TooltipFormat {
        TooltipFormat {
            currency_glyph: self.currency_glyph.clone(),
            benchmark_label: self.benchmark_label.clone(),
            grouping: self.number_grouping,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("canvas_id", &self.canvas_id),
            ("data_element_id", &self.data_element_id),
            ("controls_container_id", &self.controls_container_id),
        ] {
            if value.trim().is_empty() {
                return Err(ChartError::InvalidData(format!("`{field}` must not be empty")));
            }
        }
        if self.x_axis_max_ticks == 0 {
            return Err(ChartError::InvalidData(
                "`x_axis_max_ticks` must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}

fn default_canvas_id() -> String {
    "priceVolumeCanvas".to_owned()
}

fn default_data_element_id() -> String {
    "chart-data-source".to_owned()
}

fn default_controls_container_id() -> String {
    "chart-range-controls".to_owned()
}

fn default_currency_glyph() -> String {
    "₹".to_owned()
}

fn default_benchmark_label() -> String {
    "Nifty 50".to_owned()
}

fn default_x_axis_max_ticks() -> u32 {
    8
}
