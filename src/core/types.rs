use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::parse_series_date;
use crate::error::{ChartError, ChartResult};

/// Wire shape of the embedded JSON payload.
///
/// Every field may be absent or `null`; individual samples may be `null` too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesPayload {
    #[serde(default)]
    pub dates: Option<Vec<String>>,
    #[serde(default)]
    pub prices: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub volumes: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub index_prices: Option<Vec<Option<f64>>>,
}

/// Full, unfiltered, index-aligned series for one instrument.
///
/// Built once from a payload and read-only afterwards. All non-empty arrays
/// share one length.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDataset {
    dates: Vec<String>,
    timestamps: Vec<NaiveDateTime>,
    prices: Vec<Option<f64>>,
    volumes: Vec<Option<f64>>,
    index_prices: Vec<Option<f64>>,
}

impl SeriesDataset {
    pub fn from_payload(payload: SeriesPayload) -> ChartResult<Self> {
        let dates = payload.dates.unwrap_or_default();
        let prices = payload.prices.unwrap_or_default();
        let volumes = payload.volumes.unwrap_or_default();
        let index_prices = payload.index_prices.unwrap_or_default();

        let expected_len = [dates.len(), prices.len(), volumes.len(), index_prices.len()]
            .into_iter()
            .find(|len| *len > 0)
            .unwrap_or(0);
        for (field, len) in [
            ("dates", dates.len()),
            ("prices", prices.len()),
            ("volumes", volumes.len()),
            ("index_prices", index_prices.len()),
        ] {
            if len != 0 && len != expected_len {
                return Err(ChartError::InvalidData(format!(
                    "`{field}` has {len} samples, expected {expected_len}"
                )));
            }
        }

        let timestamps = dates
            .iter()
            .map(|date| parse_series_date(date))
            .collect::<ChartResult<Vec<_>>>()?;

        debug!(
            samples = dates.len(),
            has_index = !index_prices.is_empty(),
            "series dataset parsed"
        );

        Ok(Self {
            dates,
            timestamps,
            prices,
            volumes,
            index_prices,
        })
    }

    /// Parses the embedded JSON text of a page data element.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: SeriesPayload = serde_json::from_str(input)?;
        Self::from_payload(payload)
    }

    #[must_use]
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    #[must_use]
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    #[must_use]
    pub fn prices(&self) -> &[Option<f64>] {
        &self.prices
    }

    #[must_use]
    pub fn volumes(&self) -> &[Option<f64>] {
        &self.volumes
    }

    #[must_use]
    pub fn index_prices(&self) -> &[Option<f64>] {
        &self.index_prices
    }

    #[must_use]
    pub fn has_index(&self) -> bool {
        !self.index_prices.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Borrowed view over every sample.
    #[must_use]
    pub fn full_window(&self) -> SeriesWindow<'_> {
        self.window_from(0)
    }

    /// Borrowed view starting at `start`; out-of-range starts yield empty arrays.
    #[must_use]
    pub fn window_from(&self, start: usize) -> SeriesWindow<'_> {
        SeriesWindow {
            start,
            dates: tail(&self.dates, start),
            timestamps: tail(&self.timestamps, start),
            prices: tail(&self.prices, start),
            volumes: tail(&self.volumes, start),
            index_prices: tail(&self.index_prices, start),
        }
    }
}

fn tail<T>(values: &[T], start: usize) -> &[T] {
    &values[start.min(values.len())..]
}

/// Trailing, index-aligned view into a [`SeriesDataset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesWindow<'a> {
    pub start: usize,
    pub dates: &'a [String],
    pub timestamps: &'a [NaiveDateTime],
    pub prices: &'a [Option<f64>],
    pub volumes: &'a [Option<f64>],
    pub index_prices: &'a [Option<f64>],
}

impl SeriesWindow<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Owned copy handed to the chart layer.
    #[must_use]
    pub fn to_frame(&self) -> SeriesFrame {
        SeriesFrame {
            labels: self.dates.to_vec(),
            volumes: self.volumes.to_vec(),
            prices: self.prices.to_vec(),
            index_prices: self.index_prices.to_vec(),
        }
    }
}

/// Owned sliced data that a chart draws from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesFrame {
    pub labels: Vec<String>,
    pub volumes: Vec<Option<f64>>,
    pub prices: Vec<Option<f64>>,
    pub index_prices: Vec<Option<f64>>,
}

impl SeriesFrame {
    #[must_use]
    pub fn has_index(&self) -> bool {
        !self.index_prices.is_empty()
    }
}
