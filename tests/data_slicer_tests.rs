use chrono::NaiveDate;
use range_chart::core::{
    RangePreset, SeriesDataset, SeriesPayload, parse_series_date, range_cutoff, slice_for_range,
    start_index_at_or_after,
};

fn daily_dates(first: &str, last: &str) -> Vec<String> {
    let first = NaiveDate::parse_from_str(first, "%Y-%m-%d").expect("first date");
    let last = NaiveDate::parse_from_str(last, "%Y-%m-%d").expect("last date");
    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| day.format("%Y-%m-%d").to_string())
        .collect()
}

fn daily_dataset(first: &str, last: &str, with_index: bool) -> SeriesDataset {
    let dates = daily_dates(first, last);
    let len = dates.len();
    SeriesDataset::from_payload(SeriesPayload {
        dates: Some(dates),
        prices: Some((0..len).map(|i| Some(100.0 + i as f64)).collect()),
        volumes: Some((0..len).map(|i| Some(1_000.0 + i as f64)).collect()),
        index_prices: with_index.then(|| (0..len).map(|i| Some(20_000.0 + i as f64)).collect()),
    })
    .expect("valid dataset")
}

#[test]
fn one_year_slice_starts_at_calendar_cutoff() {
    let dataset = daily_dataset("2020-01-01", "2023-06-01", true);
    let window = slice_for_range(&dataset, RangePreset::OneYear);

    assert_eq!(window.dates.first().map(String::as_str), Some("2022-06-01"));
    assert_eq!(window.dates.last().map(String::as_str), Some("2023-06-01"));
    assert_eq!(window.len(), 366);

    let cutoff = parse_series_date("2022-06-01").expect("cutoff");
    assert!(window.timestamps.iter().all(|time| *time >= cutoff));
    assert_eq!(window.prices.first().copied().flatten(), Some(100.0 + window.start as f64));
}

#[test]
fn max_slice_borrows_the_dataset_arrays() {
    let dataset = daily_dataset("2021-01-01", "2021-12-31", true);
    let window = slice_for_range(&dataset, RangePreset::Max);

    assert_eq!(window.start, 0);
    assert_eq!(window.dates, dataset.dates());
    assert_eq!(window.prices, dataset.prices());
    assert_eq!(window.volumes, dataset.volumes());
    assert_eq!(window.index_prices, dataset.index_prices());
    assert!(std::ptr::eq(window.dates.as_ptr(), dataset.dates().as_ptr()));
    assert!(std::ptr::eq(window.prices.as_ptr(), dataset.prices().as_ptr()));
}

#[test]
fn month_subtraction_clamps_to_month_end() {
    let dataset = daily_dataset("2023-01-01", "2023-03-31", false);
    let window = slice_for_range(&dataset, RangePreset::OneMonth);

    assert_eq!(window.dates.first().map(String::as_str), Some("2023-02-28"));

    let last = parse_series_date("2024-03-31").expect("date");
    let cutoff = range_cutoff(last, RangePreset::OneMonth).expect("cutoff");
    assert_eq!(cutoff, parse_series_date("2024-02-29").expect("leap day"));
}

#[test]
fn max_has_no_cutoff() {
    let last = parse_series_date("2024-03-31").expect("date");
    assert_eq!(range_cutoff(last, RangePreset::Max), None);
    assert_eq!(
        range_cutoff(last, RangePreset::TenYears),
        Some(parse_series_date("2014-03-31").expect("date"))
    );
}

#[test]
fn missing_cutoff_match_starts_from_zero() {
    let timestamps = vec![
        parse_series_date("2020-01-01").expect("date"),
        parse_series_date("2020-01-02").expect("date"),
    ];
    let after_everything = parse_series_date("2030-01-01").expect("date");
    assert_eq!(start_index_at_or_after(&timestamps, after_everything), 0);

    let second = parse_series_date("2020-01-02").expect("date");
    assert_eq!(start_index_at_or_after(&timestamps, second), 1);
}

#[test]
fn range_longer_than_data_keeps_everything() {
    let dataset = daily_dataset("2023-01-01", "2023-02-15", true);
    let window = slice_for_range(&dataset, RangePreset::FiveYears);

    assert_eq!(window.start, 0);
    assert_eq!(window.len(), dataset.len());
}

#[test]
fn slices_stay_aligned_without_index() {
    let dataset = daily_dataset("2020-01-01", "2023-06-01", false);
    for preset in RangePreset::ALL {
        let window = slice_for_range(&dataset, preset);
        assert_eq!(window.dates.len(), window.prices.len(), "{preset}");
        assert_eq!(window.dates.len(), window.volumes.len(), "{preset}");
        assert_eq!(window.dates.len(), window.timestamps.len(), "{preset}");
        assert!(window.index_prices.is_empty(), "{preset}");
    }
}

#[test]
fn slices_stay_aligned_with_index() {
    let dataset = daily_dataset("2015-03-10", "2023-06-01", true);
    for preset in RangePreset::ALL {
        let window = slice_for_range(&dataset, preset);
        assert_eq!(window.index_prices.len(), window.dates.len(), "{preset}");
        assert_eq!(
            window.index_prices.first().copied().flatten(),
            Some(20_000.0 + window.start as f64),
            "{preset}"
        );
    }
}

#[test]
fn frame_copies_the_window() {
    let dataset = daily_dataset("2023-01-01", "2023-12-31", true);
    let frame = slice_for_range(&dataset, RangePreset::SixMonths).to_frame();

    assert_eq!(frame.labels.first().map(String::as_str), Some("2023-06-30"));
    assert_eq!(frame.labels.len(), frame.volumes.len());
    assert!(frame.has_index());
}

#[test]
fn empty_dataset_slices_to_empty_window() {
    let dataset = SeriesDataset::from_payload(SeriesPayload::default()).expect("empty dataset");
    let window = slice_for_range(&dataset, RangePreset::OneYear);
    assert!(window.is_empty());
    assert!(window.prices.is_empty());
}
