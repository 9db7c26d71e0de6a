use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Role a dataset plays in the chart; drives tooltip wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesRole {
    Volume,
    Price,
    Benchmark,
}

/// Digit grouping applied to tooltip numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NumberGrouping {
    /// `12,34,567.8` (last three digits, then pairs).
    #[default]
    Indian,
    /// `1,234,567.8`.
    Thousands,
}

const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats `value` with at most three fraction digits and grouped integer digits.
///
/// Trailing fraction zeros are dropped, halves round away from zero.
#[must_use]
pub fn format_grouped_number(value: f64, grouping: NumberGrouping) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }
    let Some(decimal) = Decimal::from_f64(value) else {
        return format!("{value}");
    };

    let rounded = decimal
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 2 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_integer_digits(integer, grouping));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_integer_digits(integer: &str, grouping: NumberGrouping) -> String {
    if integer.len() <= 3 {
        return integer.to_owned();
    }

    let (head, last_three) = integer.split_at(integer.len() - 3);
    let group_width = match grouping {
        NumberGrouping::Indian => 2,
        NumberGrouping::Thousands => 3,
    };

    let mut groups = Vec::with_capacity(head.len() / group_width + 2);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group_width);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    groups.join(",")
}

/// Tooltip wording for the price/volume chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipFormat {
    pub currency_glyph: String,
    pub benchmark_label: String,
    pub grouping: NumberGrouping,
}

impl Default for TooltipFormat {
    fn default() -> Self {
        Self {
            currency_glyph: "₹".to_owned(),
            benchmark_label: "Nifty 50".to_owned(),
            grouping: NumberGrouping::Indian,
        }
    }
}

impl TooltipFormat {
    /// One tooltip line, or `None` when the sample is missing.
    #[must_use]
    pub fn line(&self, role: SeriesRole, value: Option<f64>) -> Option<String> {
        let value = format_grouped_number(value?, self.grouping);
        Some(match role {
            SeriesRole::Price => format!("Price: {}{value}", self.currency_glyph),
            SeriesRole::Benchmark => format!("{}: {value}", self.benchmark_label),
            SeriesRole::Volume => format!("Volume: {value}"),
        })
    }
}
