//! Fixed look of the price/volume chart.

use crate::render::Color;

pub const X_AXIS_ID: &str = "x";
pub const VOLUME_AXIS_ID: &str = "y-volume";
pub const PRICE_AXIS_ID: &str = "y-price";
pub const INDEX_AXIS_ID: &str = "y-index";

// Lower order draws later, i.e. on top: volume is the backdrop, price topmost.
pub const VOLUME_DRAW_ORDER: u8 = 3;
pub const BENCHMARK_DRAW_ORDER: u8 = 2;
pub const PRICE_DRAW_ORDER: u8 = 1;

pub const VOLUME_FILL: Color = Color::rgba(148, 163, 184, 0.35);
pub const VOLUME_BAR_PERCENTAGE: f64 = 0.6;

pub const PRICE_BORDER: Color = Color::rgb(0xF5, 0x9E, 0x0B);
pub const PRICE_FILL: Color = Color::rgba(251, 191, 36, 0.25);
pub const PRICE_BORDER_WIDTH: f64 = 2.5;

pub const BENCHMARK_BORDER: Color = Color::rgb(0x0F, 0x76, 0x6E);
pub const BENCHMARK_BORDER_WIDTH: f64 = 2.0;

pub const LINE_TENSION: f64 = 0.05;

pub const AXIS_TICK_COLOR: Color = Color::rgb(0x64, 0x74, 0x8B);
pub const PRICE_GRID_COLOR: Color = Color::rgba(15, 23, 42, 0.04);
pub const PRICE_GRID_DASH: [u8; 2] = [3, 6];

pub const TOOLTIP_BACKGROUND: Color = Color::rgba(255, 255, 255, 0.95);
pub const TOOLTIP_BORDER: Color = Color::rgba(0, 0, 0, 0.08);
pub const TOOLTIP_TEXT: Color = Color::rgb(0x0F, 0x17, 0x2A);

pub const LEGEND_BOX_WIDTH: u32 = 8;
pub const LEGEND_FONT_SIZE: u32 = 11;
