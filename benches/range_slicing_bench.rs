use chrono::{Days, NaiveDate};
use criterion::{Criterion, criterion_group, criterion_main};
use range_chart::api::WidgetConfig;
use range_chart::core::{RangeOptions, RangePreset, SeriesDataset, SeriesPayload, slice_for_range};
use range_chart::render::NullBackend;
use range_chart::RangeFilteredChart;
use std::hint::black_box;

fn daily_dataset(days: u64) -> SeriesDataset {
    let start = NaiveDate::from_ymd_opt(1995, 1, 2).expect("valid start");
    let dates: Vec<String> = (0..days)
        .map(|offset| {
            start
                .checked_add_days(Days::new(offset))
                .expect("date in range")
                .format("%Y-%m-%d")
                .to_string()
        })
        .collect();
    let len = dates.len();
    SeriesDataset::from_payload(SeriesPayload {
        dates: Some(dates),
        prices: Some((0..len).map(|i| Some(100.0 + (i as f64 * 0.01).sin())).collect()),
        volumes: Some((0..len).map(|i| Some(1_000.0 + (i % 13) as f64)).collect()),
        index_prices: Some((0..len).map(|i| Some(18_000.0 + i as f64)).collect()),
    })
    .expect("valid generated dataset")
}

fn bench_range_options_30y(c: &mut Criterion) {
    let dataset = daily_dataset(30 * 365);

    c.bench_function("range_options_30y", |b| {
        b.iter(|| {
            let options = RangeOptions::from_timestamps(black_box(dataset.timestamps()));
            let _ = black_box(options.default_preset());
        })
    });
}

fn bench_slice_every_preset_30y(c: &mut Criterion) {
    let dataset = daily_dataset(30 * 365);

    c.bench_function("slice_every_preset_30y", |b| {
        b.iter(|| {
            for preset in RangePreset::ALL {
                let window = slice_for_range(black_box(&dataset), preset);
                let _ = black_box(window.len());
            }
        })
    });
}

fn bench_widget_range_switch_10y(c: &mut Criterion) {
    let mut chart = RangeFilteredChart::new(
        NullBackend::default(),
        "priceVolumeCanvas",
        daily_dataset(10 * 365),
        WidgetConfig::default(),
    );
    chart.init().expect("init");

    c.bench_function("widget_range_switch_10y", |b| {
        b.iter(|| {
            chart
                .set_active_range(black_box(RangePreset::OneYear))
                .expect("range switch");
            chart
                .set_active_range(black_box(RangePreset::Max))
                .expect("range switch");
        })
    });
}

criterion_group!(
    benches,
    bench_range_options_30y,
    bench_slice_every_preset_30y,
    bench_widget_range_switch_10y
);
criterion_main!(benches);
