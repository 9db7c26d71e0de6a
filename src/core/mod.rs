pub mod primitives;
pub mod range;
pub mod types;
pub mod windowing;

pub use primitives::{ceil_days_between, parse_series_date};
pub use range::{DateSpan, RangeOption, RangeOptions, RangePreset};
pub use types::{SeriesDataset, SeriesFrame, SeriesPayload, SeriesWindow};
pub use windowing::{range_cutoff, slice_for_range, start_index_at_or_after};
