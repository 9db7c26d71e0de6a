use tracing::{debug, trace, warn};

use crate::core::{RangeOptions, RangePreset, SeriesDataset, SeriesWindow, slice_for_range};
use crate::error::ChartResult;
use crate::render::{ChartBackend, ChartConfig, ChartHandle};

use super::{RangeButton, WidgetConfig, range_buttons};

/// Chart currently drawn by a backend plus the data model it was last fed.
#[derive(Debug, Clone, PartialEq)]
struct LiveChart {
    handle: ChartHandle,
    config: ChartConfig,
}

/// Price/volume chart with range-filter presets.
///
/// Owns its dataset, its range options and at most one live chart handle.
/// Range changes mutate the live chart in place.
pub struct RangeFilteredChart<B: ChartBackend> {
    backend: B,
    canvas_id: String,
    config: WidgetConfig,
    dataset: SeriesDataset,
    ranges: RangeOptions,
    active: Option<RangePreset>,
    chart: Option<LiveChart>,
}

impl<B: ChartBackend> RangeFilteredChart<B> {
    /// Wraps `dataset` and computes its range options. Nothing is drawn yet.
    pub fn new(
        backend: B,
        canvas_id: impl Into<String>,
        dataset: SeriesDataset,
        config: WidgetConfig,
    ) -> Self {
        let ranges = RangeOptions::from_timestamps(dataset.timestamps());
        Self {
            backend,
            canvas_id: canvas_id.into(),
            config,
            dataset,
            ranges,
            active: None,
            chart: None,
        }
    }

    /// Selects the default range and draws the first chart.
    ///
    /// Returns the selected preset, or `None` for a dataset without dates.
    pub fn init(&mut self) -> ChartResult<Option<RangePreset>> {
        let Some(preset) = self.ranges.default_preset() else {
            debug!(canvas_id = %self.canvas_id, "empty dataset, chart not initialized");
            return Ok(None);
        };
        self.set_active_range(preset)?;
        Ok(Some(preset))
    }

    /// Activates `preset` and redraws with the matching window.
    pub fn set_active_range(&mut self, preset: RangePreset) -> ChartResult<()> {
        if self.ranges.is_empty() {
            debug!(%preset, "range selection ignored for empty dataset");
            return Ok(());
        }
        if !self.ranges.is_valid(preset) {
            warn!(
                %preset,
                canvas_id = %self.canvas_id,
                "activating a range longer than the data span"
            );
        }
        self.update_chart_data(preset)?;
        self.active = Some(preset);
        Ok(())
    }

    fn update_chart_data(&mut self, preset: RangePreset) -> ChartResult<()> {
        let frame = slice_for_range(&self.dataset, preset).to_frame();

        if let Some(chart) = self.chart.as_mut() {
            // Cached data only advances once the backend accepted it.
            let mut data = chart.config.data.clone();
            data.replace_series(&frame);
            self.backend.update(chart.handle, &data)?;
            chart.config.data = data;
            trace!(%preset, samples = frame.labels.len(), "chart updated in place");
            return Ok(());
        }

        let config = ChartConfig::price_volume(
            &frame,
            self.config.tooltip_format(),
            self.config.x_axis_max_ticks,
        );
        let handle = self.backend.create(&self.canvas_id, &config)?;
        debug!(
            %preset,
            canvas_id = %self.canvas_id,
            handle = handle.0,
            datasets = config.data.datasets.len(),
            "chart created"
        );
        self.chart = Some(LiveChart { handle, config });
        Ok(())
    }

    /// Destroys the live chart, if any.
    pub fn destroy(&mut self) -> ChartResult<()> {
        if let Some(chart) = self.chart.take() {
            self.backend.destroy(chart.handle)?;
            debug!(canvas_id = %self.canvas_id, handle = chart.handle.0, "chart destroyed");
        }
        Ok(())
    }

    /// Window selected by `preset`, borrowed from the dataset.
    #[must_use]
    pub fn sliced(&self, preset: RangePreset) -> SeriesWindow<'_> {
        slice_for_range(&self.dataset, preset)
    }

    /// Valid buttons with the active one marked.
    #[must_use]
    pub fn range_buttons(&self) -> Vec<RangeButton> {
        range_buttons(&self.ranges, self.active, &self.config.button_classes)
    }

    #[must_use]
    pub fn range_options(&self) -> &RangeOptions {
        &self.ranges
    }

    #[must_use]
    pub fn default_range(&self) -> Option<RangePreset> {
        self.ranges.default_preset()
    }

    #[must_use]
    pub fn active_range(&self) -> Option<RangePreset> {
        self.active
    }

    #[must_use]
    pub fn chart_handle(&self) -> Option<ChartHandle> {
        self.chart.as_ref().map(|chart| chart.handle)
    }

    /// Config of the live chart, including its current data.
    #[must_use]
    pub fn chart_config(&self) -> Option<&ChartConfig> {
        self.chart.as_ref().map(|chart| &chart.config)
    }

    #[must_use]
    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }

    #[must_use]
    pub fn dataset(&self) -> &SeriesDataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}
