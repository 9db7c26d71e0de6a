use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartBackend, ChartConfig, ChartData, ChartHandle};

/// Chart state as the null backend last saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct NullChart {
    pub canvas_id: String,
    pub data: ChartData,
    pub redraws: usize,
}

/// Headless backend used by tests and hosts without a drawing surface.
///
/// It still validates every config and data swap so invalid charts surface
/// before a real backend is wired in.
#[derive(Debug, Default)]
pub struct NullBackend {
    next_handle: u64,
    live: IndexMap<u64, NullChart>,
    pub created: usize,
    pub updated: usize,
    pub destroyed: usize,
}

impl NullBackend {
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn chart(&self, handle: ChartHandle) -> Option<&NullChart> {
        self.live.get(&handle.0)
    }

    /// Live charts attached to `canvas_id`.
    #[must_use]
    pub fn live_on_canvas(&self, canvas_id: &str) -> usize {
        self.live
            .values()
            .filter(|chart| chart.canvas_id == canvas_id)
            .count()
    }
}

impl ChartBackend for NullBackend {
    fn create(&mut self, canvas_id: &str, config: &ChartConfig) -> ChartResult<ChartHandle> {
        config.validate()?;
        self.next_handle += 1;
        let handle = ChartHandle(self.next_handle);
        self.live.insert(
            handle.0,
            NullChart {
                canvas_id: canvas_id.to_owned(),
                data: config.data.clone(),
                redraws: 0,
            },
        );
        self.created += 1;
        Ok(handle)
    }

    fn update(&mut self, handle: ChartHandle, data: &ChartData) -> ChartResult<()> {
        data.validate()?;
        let chart = self
            .live
            .get_mut(&handle.0)
            .ok_or(ChartError::UnknownChartHandle(handle.0))?;
        chart.data.clone_from(data);
        chart.redraws += 1;
        self.updated += 1;
        Ok(())
    }

    fn destroy(&mut self, handle: ChartHandle) -> ChartResult<()> {
        self.live
            .shift_remove(&handle.0)
            .ok_or(ChartError::UnknownChartHandle(handle.0))?;
        self.destroyed += 1;
        Ok(())
    }
}
