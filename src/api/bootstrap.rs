use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace, warn};

use crate::core::{RangePreset, SeriesDataset};
use crate::error::ChartResult;
use crate::render::{ChartBackend, NullBackend};

use super::{
    NodeId, PageDom, PageEvent, PageEventHandler, RANGE_ATTRIBUTE, RangeButton,
    RangeFilteredChart, WidgetConfig,
};

/// Attribute set on a canvas once a chart is mounted on it.
pub const INITIALIZED_ATTRIBUTE: &str = "data-initialized";

/// Source of chart backends, one per mounted canvas.
pub trait BackendProvider {
    type Backend: ChartBackend;

    /// Whether the charting library is present at all.
    fn is_available(&self) -> bool;

    fn acquire(&mut self, canvas_id: &str) -> Option<Self::Backend>;
}

/// Hands out [`NullBackend`]s; `available = false` simulates a missing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullBackendProvider {
    pub available: bool,
    pub acquired: usize,
}

impl Default for NullBackendProvider {
    fn default() -> Self {
        Self {
            available: true,
            acquired: 0,
        }
    }
}

impl NullBackendProvider {
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            acquired: 0,
        }
    }
}

impl BackendProvider for NullBackendProvider {
    type Backend = NullBackend;

    fn is_available(&self) -> bool {
        self.available
    }

    fn acquire(&mut self, _canvas_id: &str) -> Option<NullBackend> {
        if !self.available {
            return None;
        }
        self.acquired += 1;
        Some(NullBackend::default())
    }
}

/// Why a bootstrap pass left the page untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    MissingCanvas,
    MissingDataElement,
    BackendUnavailable,
    AlreadyInitialized,
}

/// Result of one bootstrap pass. Never an error: failures are logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootstrapOutcome {
    Initialized {
        canvas_id: String,
        range: Option<RangePreset>,
    },
    Skipped(SkipReason),
    Failed {
        canvas_id: String,
        reason: String,
    },
}

/// Counters across every bootstrap pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapStats {
    pub payloads_parsed: usize,
    pub charts_mounted: usize,
    pub remounts: usize,
    /// Charts dropped because their canvas left the page.
    pub detached: usize,
    pub failures: usize,
}

/// A widget bound to the page nodes it was discovered in.
pub struct MountedChart<B: ChartBackend> {
    pub widget: RangeFilteredChart<B>,
    pub canvas: NodeId,
    pub controls: Option<NodeId>,
}

/// Per-canvas widget ownership, keyed by canvas id.
pub struct ChartRegistry<B: ChartBackend> {
    entries: IndexMap<String, MountedChart<B>>,
}

impl<B: ChartBackend> Default for ChartRegistry<B> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<B: ChartBackend> ChartRegistry<B> {
    #[must_use]
    pub fn get(&self, canvas_id: &str) -> Option<&MountedChart<B>> {
        self.entries.get(canvas_id)
    }

    pub fn get_mut(&mut self, canvas_id: &str) -> Option<&mut MountedChart<B>> {
        self.entries.get_mut(canvas_id)
    }

    #[must_use]
    pub fn contains(&self, canvas_id: &str) -> bool {
        self.entries.contains_key(canvas_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MountedChart<B>)> {
        self.entries
            .iter()
            .map(|(canvas_id, mounted)| (canvas_id.as_str(), mounted))
    }

    fn insert(&mut self, canvas_id: String, mounted: MountedChart<B>) {
        self.entries.insert(canvas_id, mounted);
    }

    fn remove(&mut self, canvas_id: &str) -> Option<MountedChart<B>> {
        self.entries.shift_remove(canvas_id)
    }

    fn find_by_controls_mut(&mut self, container: NodeId) -> Option<&mut MountedChart<B>> {
        self.entries
            .values_mut()
            .find(|mounted| mounted.controls == Some(container))
    }
}

/// Discovers chart payloads in a page and mounts one widget per canvas.
pub struct Bootstrapper<P: BackendProvider> {
    id: String,
    provider: P,
    config: WidgetConfig,
    registry: ChartRegistry<P::Backend>,
    stats: BootstrapStats,
}

impl<P: BackendProvider> Bootstrapper<P> {
    #[must_use]
    pub fn new(provider: P, config: WidgetConfig) -> Self {
        Self {
            id: format!("range-chart:{}", config.canvas_id),
            provider,
            config,
            registry: ChartRegistry::default(),
            stats: BootstrapStats::default(),
        }
    }

    /// Mounts a chart for the canvas found inside `scope`, at most once.
    ///
    /// Every pass first drops charts whose canvas is no longer attached.
    pub fn bootstrap<D: PageDom>(&mut self, page: &mut D, scope: NodeId) -> BootstrapOutcome {
        let detached = self.unmount_detached(page);
        let Some(canvas) = page.find_by_id(scope, &self.config.canvas_id) else {
            trace!(?scope, "no chart canvas in scope");
            return BootstrapOutcome::Skipped(SkipReason::MissingCanvas);
        };
        let Some(data_element) = page.find_by_id(scope, &self.config.data_element_id) else {
            trace!(?scope, "no chart data element in scope");
            return BootstrapOutcome::Skipped(SkipReason::MissingDataElement);
        };
        if !self.provider.is_available() {
            debug!("charting backend unavailable");
            return BootstrapOutcome::Skipped(SkipReason::BackendUnavailable);
        }

        let canvas_id = self.config.canvas_id.clone();
        let mounted_canvas = self.registry.get(&canvas_id).map(|mounted| mounted.canvas);
        match mounted_canvas {
            Some(mounted) if mounted == canvas => {
                trace!(%canvas_id, "chart already mounted");
                return BootstrapOutcome::Skipped(SkipReason::AlreadyInitialized);
            }
            Some(_) => {
                // Another attached node took over the id; drop the old chart first.
                if let Err(err) = self.unmount(&canvas_id) {
                    warn!(error = %err, %canvas_id, "failed to destroy replaced chart");
                }
                self.stats.remounts += 1;
            }
            None => {
                if page.attribute(canvas, INITIALIZED_ATTRIBUTE).as_deref() == Some("true") {
                    return BootstrapOutcome::Skipped(SkipReason::AlreadyInitialized);
                }
                if detached.iter().any(|id| *id == canvas_id) {
                    self.stats.remounts += 1;
                }
            }
        }

        let payload = page.text_content(data_element).unwrap_or_default();
        self.stats.payloads_parsed += 1;
        let dataset = match SeriesDataset::from_json_str(&payload) {
            Ok(dataset) => dataset,
            Err(err) => return self.fail(canvas_id, err.to_string()),
        };

        let Some(backend) = self.provider.acquire(&canvas_id) else {
            debug!(%canvas_id, "charting backend refused canvas");
            return BootstrapOutcome::Skipped(SkipReason::BackendUnavailable);
        };
        let mut widget =
            RangeFilteredChart::new(backend, canvas_id.clone(), dataset, self.config.clone());
        let range = match widget.init() {
            Ok(range) => range,
            Err(err) => return self.fail(canvas_id, err.to_string()),
        };

        let controls_id = &self.config.controls_container_id;
        let controls = page
            .find_by_id(scope, controls_id)
            .or_else(|| page.find_by_id(page.document(), controls_id));
        if let Some(container) = controls {
            let buttons = widget.range_buttons();
            if !buttons.is_empty() {
                let elements = buttons.iter().map(RangeButton::element).collect();
                page.replace_children(container, elements);
            }
        }

        page.set_attribute(canvas, INITIALIZED_ATTRIBUTE, "true");
        self.registry.insert(
            canvas_id.clone(),
            MountedChart {
                widget,
                canvas,
                controls,
            },
        );
        self.stats.charts_mounted += 1;
        debug!(%canvas_id, range = ?range, "chart mounted");
        BootstrapOutcome::Initialized { canvas_id, range }
    }

    /// Unmounts every chart whose canvas was removed from the page.
    ///
    /// Returns the canvas ids that were dropped.
    fn unmount_detached<D: PageDom>(&mut self, page: &D) -> Vec<String> {
        let stale: Vec<String> = self
            .registry
            .iter()
            .filter(|(_, mounted)| !page.is_attached(mounted.canvas))
            .map(|(canvas_id, _)| canvas_id.to_owned())
            .collect();
        for canvas_id in &stale {
            if let Err(err) = self.unmount(canvas_id) {
                warn!(error = %err, %canvas_id, "failed to destroy detached chart");
            }
            self.stats.detached += 1;
            debug!(%canvas_id, "detached chart unmounted");
        }
        stale
    }

    fn fail(&mut self, canvas_id: String, reason: String) -> BootstrapOutcome {
        error!(%canvas_id, error = %reason, "chart init failed");
        self.stats.failures += 1;
        BootstrapOutcome::Failed { canvas_id, reason }
    }

    /// Handles a click on a range button rendered by a mounted widget.
    ///
    /// Returns the activated preset, or `None` when `button` is not one of ours.
    pub fn click_range<D: PageDom>(
        &mut self,
        page: &mut D,
        button: NodeId,
    ) -> ChartResult<Option<RangePreset>> {
        let Some(label) = page.attribute(button, RANGE_ATTRIBUTE) else {
            return Ok(None);
        };
        let Some(container) = page.parent(button) else {
            return Ok(None);
        };
        let Some(mounted) = self.registry.find_by_controls_mut(container) else {
            return Ok(None);
        };

        let preset: RangePreset = label.parse()?;
        mounted.widget.set_active_range(preset)?;
        sync_button_classes(page, container, &mounted.widget.range_buttons());
        Ok(Some(preset))
    }

    /// Activates `preset` on the widget mounted on `canvas_id`.
    ///
    /// Returns `false` when no widget is mounted there.
    pub fn select_range<D: PageDom>(
        &mut self,
        page: &mut D,
        canvas_id: &str,
        preset: RangePreset,
    ) -> ChartResult<bool> {
        let Some(mounted) = self.registry.get_mut(canvas_id) else {
            return Ok(false);
        };
        mounted.widget.set_active_range(preset)?;
        if let Some(container) = mounted.controls {
            sync_button_classes(page, container, &mounted.widget.range_buttons());
        }
        Ok(true)
    }

    /// Removes the widget mounted on `canvas_id` and destroys its chart.
    pub fn unmount(&mut self, canvas_id: &str) -> ChartResult<bool> {
        let Some(mut mounted) = self.registry.remove(canvas_id) else {
            return Ok(false);
        };
        mounted.widget.destroy()?;
        Ok(true)
    }

    #[must_use]
    pub fn registry(&self) -> &ChartRegistry<P::Backend> {
        &self.registry
    }

    #[must_use]
    pub fn stats(&self) -> BootstrapStats {
        self.stats
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

fn sync_button_classes<D: PageDom>(page: &mut D, container: NodeId, buttons: &[RangeButton]) {
    for node in page.children(container) {
        let Some(label) = page.attribute(node, RANGE_ATTRIBUTE) else {
            continue;
        };
        if let Some(button) = buttons.iter().find(|button| button.preset.label() == label) {
            page.set_attribute(node, "class", &button.class);
        }
    }
}

impl<D: PageDom, P: BackendProvider> PageEventHandler<D> for Bootstrapper<P> {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, page: &mut D, event: PageEvent) {
        match event {
            PageEvent::Clicked { target } => {
                if let Err(err) = self.click_range(page, target) {
                    error!(error = %err, "range selection failed");
                }
            }
            PageEvent::Loaded | PageEvent::PartialSwap { .. } => {
                if let Some(scope) = event.scope(page) {
                    let outcome = self.bootstrap(page, scope);
                    trace!(?outcome, "bootstrap pass finished");
                }
            }
        }
    }
}
