use chrono::{Months, NaiveDateTime};
use tracing::trace;

use crate::core::{RangePreset, SeriesDataset, SeriesWindow};

/// Earliest instant kept by `preset` when the series ends at `last`.
///
/// Subtraction is calendar aware: a day that does not exist in the target
/// month clamps to that month's last day. Returns `None` for MAX and when the
/// result would fall outside the representable range.
#[must_use]
pub fn range_cutoff(last: NaiveDateTime, preset: RangePreset) -> Option<NaiveDateTime> {
    let months = preset.lookback_months()?;
    last.checked_sub_months(Months::new(months))
}

/// First index whose timestamp is at or after `cutoff`.
///
/// Scans from the start; a miss resolves to index 0 so the whole series is kept.
#[must_use]
pub fn start_index_at_or_after(timestamps: &[NaiveDateTime], cutoff: NaiveDateTime) -> usize {
    timestamps
        .iter()
        .position(|time| *time >= cutoff)
        .unwrap_or(0)
}

/// Returns the trailing window of `dataset` selected by `preset`.
///
/// MAX borrows the dataset's arrays unchanged.
#[must_use]
pub fn slice_for_range(dataset: &SeriesDataset, preset: RangePreset) -> SeriesWindow<'_> {
    let Some(last) = dataset.timestamps().last().copied() else {
        return dataset.full_window();
    };
    let Some(cutoff) = range_cutoff(last, preset) else {
        return dataset.full_window();
    };

    let start = start_index_at_or_after(dataset.timestamps(), cutoff);
    trace!(%preset, %cutoff, start, "range window resolved");
    dataset.window_from(start)
}
