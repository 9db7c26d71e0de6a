use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::primitives::ceil_days_between;
use crate::error::ChartError;

/// Named trailing lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RangePreset {
    /// 1M
    OneMonth,
    /// 6M
    SixMonths,
    /// 1Y
    OneYear,
    /// 3Y
    ThreeYears,
    /// 5Y
    FiveYears,
    /// 10Y
    TenYears,
    /// MAX
    Max,
}

impl RangePreset {
    /// Every preset in button display order.
    pub const ALL: [RangePreset; 7] = [
        RangePreset::OneMonth,
        RangePreset::SixMonths,
        RangePreset::OneYear,
        RangePreset::ThreeYears,
        RangePreset::FiveYears,
        RangePreset::TenYears,
        RangePreset::Max,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RangePreset::OneMonth => "1M",
            RangePreset::SixMonths => "6M",
            RangePreset::OneYear => "1Y",
            RangePreset::ThreeYears => "3Y",
            RangePreset::FiveYears => "5Y",
            RangePreset::TenYears => "10Y",
            RangePreset::Max => "MAX",
        }
    }

    /// Calendar months subtracted from the last date; `None` for MAX.
    #[must_use]
    pub const fn lookback_months(self) -> Option<u32> {
        match self {
            RangePreset::OneMonth => Some(1),
            RangePreset::SixMonths => Some(6),
            RangePreset::OneYear => Some(12),
            RangePreset::ThreeYears => Some(36),
            RangePreset::FiveYears => Some(60),
            RangePreset::TenYears => Some(120),
            RangePreset::Max => None,
        }
    }

    /// Whether a dataset covering `span` is long enough for this preset.
    #[must_use]
    pub fn is_satisfied_by(self, span: DateSpan) -> bool {
        match self {
            RangePreset::OneMonth => span.months() >= 1.0,
            RangePreset::SixMonths => span.months() >= 6.0,
            RangePreset::OneYear => span.years() >= 1.0,
            RangePreset::ThreeYears => span.years() >= 3.0,
            RangePreset::FiveYears => span.years() >= 5.0,
            RangePreset::TenYears => span.years() >= 10.0,
            RangePreset::Max => true,
        }
    }
}

impl Display for RangePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

impl FromStr for RangePreset {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangePreset::ALL
            .into_iter()
            .find(|preset| preset.label() == s)
            .ok_or_else(|| ChartError::UnknownRange(s.to_owned()))
    }
}

impl TryFrom<String> for RangePreset {
    type Error = ChartError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        RangePreset::from_str(&s)
    }
}

impl From<RangePreset> for String {
    fn from(preset: RangePreset) -> Self {
        preset.label().to_owned()
    }
}

/// Covered span of a date sequence, in whole days rounded up.
///
/// Months are approximated as 30 days and years as 365 days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateSpan {
    pub days: f64,
}

impl DateSpan {
    #[must_use]
    pub fn between(first: NaiveDateTime, last: NaiveDateTime) -> Self {
        Self {
            days: ceil_days_between(first, last),
        }
    }

    /// Span from first to last element; `None` for an empty sequence.
    #[must_use]
    pub fn of(timestamps: &[NaiveDateTime]) -> Option<Self> {
        let first = timestamps.first()?;
        let last = timestamps.last()?;
        Some(Self::between(*first, *last))
    }

    #[must_use]
    pub fn months(self) -> f64 {
        self.days / 30.0
    }

    #[must_use]
    pub fn years(self) -> f64 {
        self.days / 365.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeOption {
    pub preset: RangePreset,
    pub valid: bool,
}

/// Presets in display order with their validity for one dataset.
///
/// Computed once per dataset; empty when the dataset has no dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeOptions {
    options: SmallVec<[RangeOption; 7]>,
}

impl RangeOptions {
    #[must_use]
    pub fn from_timestamps(timestamps: &[NaiveDateTime]) -> Self {
        let Some(span) = DateSpan::of(timestamps) else {
            debug!("no dates, range options left empty");
            return Self::default();
        };

        let options: SmallVec<[RangeOption; 7]> = RangePreset::ALL
            .into_iter()
            .map(|preset| RangeOption {
                preset,
                valid: preset.is_satisfied_by(span),
            })
            .collect();
        debug!(
            span_days = span.days,
            valid = options.iter().filter(|option| option.valid).count(),
            "range options computed"
        );
        Self { options }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RangeOption> {
        self.options.iter()
    }

    /// Valid presets in display order.
    pub fn valid_presets(&self) -> impl Iterator<Item = RangePreset> + '_ {
        self.options
            .iter()
            .filter(|option| option.valid)
            .map(|option| option.preset)
    }

    #[must_use]
    pub fn is_valid(&self, preset: RangePreset) -> bool {
        self.options
            .iter()
            .any(|option| option.preset == preset && option.valid)
    }

    /// Largest valid preset other than MAX, falling back to MAX.
    ///
    /// `None` only when there are no options at all.
    #[must_use]
    pub fn default_preset(&self) -> Option<RangePreset> {
        if self.options.is_empty() {
            return None;
        }
        Some(
            self.valid_presets()
                .filter(|preset| *preset != RangePreset::Max)
                .last()
                .unwrap_or(RangePreset::Max),
        )
    }
}
