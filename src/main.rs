//! trend — replay a sample stream through the chart updater.
//!
//! Run with:  `RUST_LOG=debug trend [--config <path>] [--window <n>] [<samples-file>]`
//!
//! Samples are whitespace-separated numbers, read from stdin when no file is
//! given.  Each sample is one tick: it is pushed into the rolling window and
//! the chart is redrawn against an in-memory display.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trend_chart::{ChartUpdater, RecordingBackend, SampleHistory};
use trend_core::{Axis, UpdateStatus};

#[derive(Debug, Default)]
struct Args {
    config:  Option<PathBuf>,
    window:  Option<usize>,
    samples: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                args.config = Some(it.next().context("--config needs a path")?.into());
            }
            "--window" => {
                let raw = it.next().context("--window needs a number")?;
                args.window = Some(raw.parse().with_context(|| format!("bad --window '{raw}'"))?);
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            _ => args.samples = Some(arg.into()),
        }
    }
    Ok(args)
}

fn read_samples(path: Option<&PathBuf>) -> Result<Vec<f32>> {
    let raw = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("cannot read samples from '{}'", p.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("cannot read stdin")?;
            buf
        }
    };

    Ok(raw
        .split_whitespace()
        .filter_map(|tok| match tok.parse::<f32>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("skipping non-numeric sample '{tok}'");
                None
            }
        })
        .collect())
}

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("trend v{} starting", env!("CARGO_PKG_VERSION"));

    let args = parse_args()?;
    let config_path = args.config.clone().unwrap_or_else(trend_config::default_path);
    let mut config = trend_config::load(&config_path)?;
    if let Some(window) = args.window {
        config.history.capacity = window;
    }
    config.validate()?;

    let samples = read_samples(args.samples.as_ref())?;
    info!(count = samples.len(), "samples loaded");

    let updater = ChartUpdater::from_config(&config);
    let mut display = RecordingBackend::new();
    let handle = updater.initialize(&mut display, &(), config.layout, updater.style().line_color)?;
    let Some(series) = handle.series else {
        bail!("display refused to create the chart series");
    };

    let mut history = SampleHistory::new(config.history.capacity);
    let mut applied = 0usize;
    for sample in samples {
        history.push(sample);
        if let UpdateStatus::Applied { .. } = updater.update_history(&mut display, &handle, &mut history) {
            applied += 1;
        }
        // Only the latest frame matters; keep the call log from growing.
        display.take_calls();
    }

    let Some(chart) = display.chart(handle.widget) else {
        bail!("chart widget disappeared");
    };
    let range = chart.range(Axis::PrimaryY);
    info!(
        ticks = applied,
        window = history.len(),
        average = history.average(),
        min = range.min,
        max = range.max,
        "replay finished"
    );

    println!("range: [{}, {}]", range.min, range.max);
    let points: Vec<String> = display.points(series).iter().map(i32::to_string).collect();
    println!("points: {}", points.join(" "));
    Ok(())
}
