use serde::{Deserialize, Serialize};

use crate::core::{RangeOptions, RangePreset};

use super::ElementSpec;

/// Attribute carrying a button's preset label.
pub const RANGE_ATTRIBUTE: &str = "data-range";

/// CSS class sets toggled on range buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeButtonClasses {
    /// Always present.
    #[serde(default = "default_base_classes")]
    pub base: Vec<String>,
    /// Present while the button is not selected.
    #[serde(default = "default_idle_classes")]
    pub idle: Vec<String>,
    /// Present while the button is selected.
    #[serde(default = "default_active_classes")]
    pub active: Vec<String>,
}

impl Default for RangeButtonClasses {
    fn default() -> Self {
        Self {
            base: default_base_classes(),
            idle: default_idle_classes(),
            active: default_active_classes(),
        }
    }
}

impl RangeButtonClasses {
    /// Space separated `class` attribute for a button in the given state.
    #[must_use]
    pub fn class_attribute(&self, active: bool) -> String {
        let state = if active { &self.active } else { &self.idle };
        self.base
            .iter()
            .chain(state.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn split_classes(classes: &str) -> Vec<String> {
    classes.split_whitespace().map(str::to_owned).collect()
}

fn default_base_classes() -> Vec<String> {
    split_classes(
        "px-3 py-1 text-xs font-medium rounded-full transition-all hover:bg-amber-100/60",
    )
}

fn default_idle_classes() -> Vec<String> {
    split_classes("text-slate-600")
}

fn default_active_classes() -> Vec<String> {
    split_classes("bg-amber-400/90 text-white shadow-md")
}

/// One rendered range-filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeButton {
    pub preset: RangePreset,
    pub active: bool,
    pub class: String,
}

impl RangeButton {
    #[must_use]
    pub fn element(&self) -> ElementSpec {
        ElementSpec::new("button")
            .with_attribute(RANGE_ATTRIBUTE, self.preset.label())
            .with_attribute("class", self.class.clone())
            .with_text(self.preset.label())
    }
}

/// Buttons for every valid preset in display order.
#[must_use]
pub fn range_buttons(
    options: &RangeOptions,
    active: Option<RangePreset>,
    classes: &RangeButtonClasses,
) -> Vec<RangeButton> {
    options
        .valid_presets()
        .map(|preset| {
            let is_active = active == Some(preset);
            RangeButton {
                preset,
                active: is_active,
                class: classes.class_attribute(is_active),
            }
        })
        .collect()
}
