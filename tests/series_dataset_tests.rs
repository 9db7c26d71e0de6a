use range_chart::ChartError;
use range_chart::core::{SeriesDataset, parse_series_date};

#[test]
fn payload_with_nulls_and_missing_index_parses() {
    let dataset = SeriesDataset::from_json_str(
        r#"{
            "dates": ["2024-01-01", "2024-01-02", "2024-01-03"],
            "prices": [101.5, null, 103.0],
            "volumes": [1200, 900, null]
        }"#,
    )
    .expect("valid payload");

    assert_eq!(dataset.len(), 3);
    assert!(!dataset.has_index());
    assert_eq!(dataset.prices(), &[Some(101.5), None, Some(103.0)]);
    assert_eq!(dataset.volumes()[2], None);
    assert_eq!(dataset.timestamps()[1], parse_series_date("2024-01-02").expect("date"));
}

#[test]
fn explicit_null_arrays_are_treated_as_absent() {
    let dataset = SeriesDataset::from_json_str(
        r#"{"dates": ["2024-01-01"], "prices": [1.0], "volumes": null, "index_prices": null}"#,
    )
    .expect("valid payload");
    assert!(dataset.volumes().is_empty());
    assert!(!dataset.has_index());
}

#[test]
fn misaligned_arrays_are_rejected() {
    let err = SeriesDataset::from_json_str(
        r#"{"dates": ["2024-01-01", "2024-01-02"], "prices": [1.0, 2.0], "index_prices": [1.0]}"#,
    )
    .expect_err("misaligned index");
    assert!(matches!(err, ChartError::InvalidData(ref message) if message.contains("index_prices")));
}

#[test]
fn unparseable_dates_are_rejected() {
    let err = SeriesDataset::from_json_str(r#"{"dates": ["2024-13-45"], "prices": [1.0]}"#)
        .expect_err("bad date");
    assert!(matches!(err, ChartError::InvalidDate { ref value } if value == "2024-13-45"));
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = SeriesDataset::from_json_str("{").expect_err("bad json");
    assert!(matches!(err, ChartError::Json(_)));
}

#[test]
fn date_formats_with_time_parts_are_accepted() {
    let midnight = parse_series_date("2024-05-01").expect("date only");
    for raw in [
        "2024-05-01T00:00:00",
        "2024-05-01 00:00:00",
        "2024-05-01T00:00:00.000",
        "2024-05-01T00:00:00Z",
    ] {
        assert_eq!(parse_series_date(raw).expect(raw), midnight, "{raw}");
    }
}

#[test]
fn window_from_clamps_out_of_range_starts() {
    let dataset = SeriesDataset::from_json_str(
        r#"{"dates": ["2024-01-01", "2024-01-02"], "prices": [1.0, 2.0], "volumes": [3, 4]}"#,
    )
    .expect("valid payload");

    let tail = dataset.window_from(1);
    assert_eq!(tail.dates, &["2024-01-02".to_owned()]);
    assert_eq!(tail.volumes, &[Some(4.0)]);

    let past_end = dataset.window_from(10);
    assert!(past_end.is_empty());
    assert!(past_end.prices.is_empty());
}
