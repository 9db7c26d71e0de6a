use range_chart::WidgetConfig;
use range_chart::core::{RangeOptions, RangePreset, SeriesDataset, slice_for_range};
use range_chart::render::ChartConfig;
use range_chart::telemetry;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: range_chart_config --input <payload.json> [--config <widget.json>] [--range <1M|6M|1Y|3Y|5Y|10Y|MAX>] [--ranges-only]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    config: Option<PathBuf>,
    range: Option<RangePreset>,
    ranges_only: bool,
}

#[derive(Debug, Serialize)]
struct RangeReport<'a> {
    span_days: Option<f64>,
    default_range: Option<RangePreset>,
    options: &'a RangeOptions,
}

fn main() {
    let _ = telemetry::init_tracing_with_filter("warn");
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            WidgetConfig::from_json_str(&raw).map_err(|e| e.to_string())?
        }
        None => WidgetConfig::default(),
    };

    let raw = fs::read_to_string(&args.input)
        .map_err(|e| format!("failed to read {}: {e}", args.input.display()))?;
    let dataset = SeriesDataset::from_json_str(&raw).map_err(|e| e.to_string())?;
    let options = RangeOptions::from_timestamps(dataset.timestamps());

    let output = if args.ranges_only {
        let report = RangeReport {
            span_days: range_chart::core::DateSpan::of(dataset.timestamps()).map(|s| s.days),
            default_range: options.default_preset(),
            options: &options,
        };
        serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?
    } else {
        let Some(range) = args.range.or_else(|| options.default_preset()) else {
            return Err("payload has no dates, nothing to chart".to_owned());
        };
        let frame = slice_for_range(&dataset, range).to_frame();
        ChartConfig::price_volume(&frame, config.tooltip_format(), config.x_axis_max_ticks)
            .to_json_pretty()
            .map_err(|e| e.to_string())?
    };

    println!("{output}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut range = None::<RangePreset>;
    let mut ranges_only = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--range" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --range".to_owned())?;
                range = Some(value.parse::<RangePreset>().map_err(|e| e.to_string())?);
            }
            "--ranges-only" => ranges_only = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    let input = input.ok_or_else(|| USAGE.to_owned())?;
    Ok(CliArgs {
        input,
        config,
        range,
        ranges_only,
    })
}
