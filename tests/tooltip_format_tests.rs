use range_chart::render::{NumberGrouping, SeriesRole, TooltipFormat, format_grouped_number};

#[test]
fn indian_grouping_uses_pairs_after_the_last_three_digits() {
    let cases = [
        (1_234_567.891, "12,34,567.891"),
        (100_000.0, "1,00,000"),
        (1_000.0, "1,000"),
        (999.0, "999"),
        (12_345_678_901.0, "12,34,56,78,901"),
        (0.0, "0"),
    ];
    for (value, expected) in cases {
        assert_eq!(format_grouped_number(value, NumberGrouping::Indian), expected, "{value}");
    }
}

#[test]
fn thousands_grouping_uses_triples() {
    assert_eq!(
        format_grouped_number(1_234_567.891, NumberGrouping::Thousands),
        "1,234,567.891"
    );
    assert_eq!(format_grouped_number(100_000.0, NumberGrouping::Thousands), "100,000");
}

#[test]
fn fractions_are_capped_at_three_digits() {
    assert_eq!(format_grouped_number(0.12345, NumberGrouping::Indian), "0.123");
    assert_eq!(format_grouped_number(2.5, NumberGrouping::Indian), "2.5");
    assert_eq!(format_grouped_number(1.0625, NumberGrouping::Indian), "1.063");
    assert_eq!(format_grouped_number(7.100, NumberGrouping::Indian), "7.1");
}

#[test]
fn negative_values_keep_their_sign() {
    assert_eq!(format_grouped_number(-1_234.5, NumberGrouping::Indian), "-1,234.5");
    assert_eq!(format_grouped_number(-0.0001, NumberGrouping::Indian), "0");
}

#[test]
fn lines_follow_series_role() {
    let format = TooltipFormat::default();

    assert_eq!(
        format.line(SeriesRole::Price, Some(2_450.75)).as_deref(),
        Some("Price: ₹2,450.75")
    );
    assert_eq!(
        format.line(SeriesRole::Benchmark, Some(21_731.4)).as_deref(),
        Some("Nifty 50: 21,731.4")
    );
    assert_eq!(
        format.line(SeriesRole::Volume, Some(1_234_567.0)).as_deref(),
        Some("Volume: 12,34,567")
    );
    assert_eq!(format.line(SeriesRole::Price, None), None);
}

#[test]
fn custom_glyph_label_and_grouping_apply() {
    let format = TooltipFormat {
        currency_glyph: "$".to_owned(),
        benchmark_label: "S&P 500".to_owned(),
        grouping: NumberGrouping::Thousands,
    };

    assert_eq!(
        format.line(SeriesRole::Price, Some(1_234_567.0)).as_deref(),
        Some("Price: $1,234,567")
    );
    assert_eq!(
        format.line(SeriesRole::Benchmark, Some(5_000.125)).as_deref(),
        Some("S&P 500: 5,000.125")
    );
}
