//! Component surface: the range-filtered chart widget and the page plumbing
//! that discovers and mounts it.

mod bootstrap;
mod chart_widget;
mod events;
mod page;
mod range_controls;
mod widget_config;

pub use bootstrap::{
    BackendProvider, BootstrapOutcome, BootstrapStats, Bootstrapper, ChartRegistry,
    INITIALIZED_ATTRIBUTE, MountedChart, NullBackendProvider, SkipReason,
};
pub use chart_widget::RangeFilteredChart;
pub use events::{EventBus, PageEvent, PageEventHandler, SharedHandler};
pub use page::{ElementSpec, MemoryPage, NodeId, PageDom};
pub use range_controls::{RANGE_ATTRIBUTE, RangeButton, RangeButtonClasses, range_buttons};
pub use widget_config::WidgetConfig;
