//! Chart rendering for the dashboard.
//!
//! Each operation "presents" the chart as a deterministic ASCII rendering
//! written to the injected output (the console-program stand-in for a
//! chart window) and, when given a save directory, additionally renders a
//! PNG at a fixed filename via Plotters. The filenames are constants, so
//! repeated saves overwrite the previous image.
//!
//! The PNGs are drawn without text (no captions or tick labels); that
//! keeps Plotters' font machinery and its system dependencies out of the
//! build. Titles, ranges, and condition labels live in the terminal
//! rendering instead.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime};
use plotters::coord::types::RangedDateTime;
use plotters::prelude::*;
use std::io::Write;
use std::path::Path;

use forecast_core::ForecastSeries;
use forecast_core::forecast::TIMESTAMP_FORMAT;

use crate::ascii::{Canvas, pad_range};

pub const TEMPERATURE_PLOT_FILE: &str = "temperature_plot.png";
pub const HUMIDITY_PLOT_FILE: &str = "humidity_plot.png";
pub const SCATTER_PLOT_FILE: &str = "scatter_plot.png";

const PLOT_SIZE: (u32, u32) = (1024, 768);
const ASCII_WIDTH: usize = 72;
const ASCII_HEIGHT: usize = 16;

/// Marker characters cycled by sample index in the terminal scatter.
const SCATTER_MARKERS: [char; 4] = ['o', 'x', '+', '*'];

/// Temperature over time: connected markers.
pub fn temperature_plot<W: Write>(
    out: &mut W,
    series: &ForecastSeries,
    city: &str,
    save_dir: Option<&Path>,
) -> Result<()> {
    if series.is_empty() {
        writeln!(out, "No forecast samples to plot.")?;
        return Ok(());
    }

    let temps = series.temperatures();
    let (y_lo, y_hi) = padded_value_range(temps);

    writeln!(out, "Temperature for {city} ({} samples)", series.len())?;
    writeln!(out, "{} | {:.1}..{:.1}", time_span_label(series), min_of(temps), max_of(temps))?;

    let mut canvas = Canvas::new(
        ASCII_WIDTH,
        ASCII_HEIGHT,
        (0.0, series.len() as f64 - 1.0),
        (y_lo, y_hi),
    );
    for i in 1..series.len() {
        canvas.line(
            ((i - 1) as f64, temps[i - 1]),
            (i as f64, temps[i]),
            '-',
        );
    }
    for (i, &t) in temps.iter().enumerate() {
        canvas.point(i as f64, t, 'o');
    }
    write!(out, "{}", canvas.render())?;

    if let Some(dir) = save_dir {
        let path = dir.join(TEMPERATURE_PLOT_FILE);
        save_temperature_png(&path, series)
            .with_context(|| format!("Failed to render {}", path.display()))?;
        writeln!(out, "Saved {}", path.display())?;
    }

    Ok(())
}

/// Humidity over time: discrete vertical bars on a fixed 0..100% scale.
pub fn humidity_plot<W: Write>(
    out: &mut W,
    series: &ForecastSeries,
    city: &str,
    save_dir: Option<&Path>,
) -> Result<()> {
    if series.is_empty() {
        writeln!(out, "No forecast samples to plot.")?;
        return Ok(());
    }

    writeln!(out, "Humidity for {city} ({} samples)", series.len())?;
    writeln!(out, "{} | 0..100%", time_span_label(series))?;

    let mut canvas = Canvas::new(
        ASCII_WIDTH,
        ASCII_HEIGHT,
        (0.0, series.len() as f64 - 1.0),
        (0.0, 100.0),
    );
    for (i, &h) in series.humidities().iter().enumerate() {
        canvas.bar(i as f64, f64::from(h), '#');
    }
    write!(out, "{}", canvas.render())?;

    if let Some(dir) = save_dir {
        let path = dir.join(HUMIDITY_PLOT_FILE);
        save_humidity_png(&path, series)
            .with_context(|| format!("Failed to render {}", path.display()))?;
        writeln!(out, "Saved {}", path.display())?;
    }

    Ok(())
}

/// Temperature scatter with markers varied by sample index, plus the
/// weather conditions attached as one aggregate label for the whole
/// series rather than per-point annotations.
pub fn description_scatter<W: Write>(
    out: &mut W,
    series: &ForecastSeries,
    city: &str,
    save_dir: Option<&Path>,
) -> Result<()> {
    if series.is_empty() {
        writeln!(out, "No forecast samples to plot.")?;
        return Ok(());
    }

    let temps = series.temperatures();
    let (y_lo, y_hi) = padded_value_range(temps);

    writeln!(out, "Conditions scatter for {city} ({} samples)", series.len())?;
    writeln!(out, "{} | {:.1}..{:.1}", time_span_label(series), min_of(temps), max_of(temps))?;

    let mut canvas = Canvas::new(
        ASCII_WIDTH,
        ASCII_HEIGHT,
        (0.0, series.len() as f64 - 1.0),
        (y_lo, y_hi),
    );
    for (i, &t) in temps.iter().enumerate() {
        canvas.point(i as f64, t, SCATTER_MARKERS[i % SCATTER_MARKERS.len()]);
    }
    write!(out, "{}", canvas.render())?;
    writeln!(out, "Conditions: {}", aggregate_conditions(series))?;

    if let Some(dir) = save_dir {
        let path = dir.join(SCATTER_PLOT_FILE);
        save_scatter_png(&path, series)
            .with_context(|| format!("Failed to render {}", path.display()))?;
        writeln!(out, "Saved {}", path.display())?;
    }

    Ok(())
}

/// Distinct descriptions in first-seen order, joined into one label.
fn aggregate_conditions(series: &ForecastSeries) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for desc in series.descriptions() {
        if !seen.contains(&desc.as_str()) {
            seen.push(desc);
        }
    }
    seen.join(", ")
}

fn time_span_label(series: &ForecastSeries) -> String {
    let ts = series.timestamps();
    format!(
        "{} .. {}",
        ts[0].format(TIMESTAMP_FORMAT),
        ts[ts.len() - 1].format(TIMESTAMP_FORMAT)
    )
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn padded_value_range(values: &[f64]) -> (f64, f64) {
    pad_range(min_of(values), max_of(values), 0.1)
}

/// Time bounds for the x-axis. A single-sample series gets an artificial
/// three-hour span (the provider's delivery interval) so the axis stays
/// non-degenerate.
fn time_bounds(timestamps: &[NaiveDateTime]) -> (NaiveDateTime, NaiveDateTime) {
    let first = timestamps[0];
    let last = timestamps[timestamps.len() - 1];
    if first == last {
        (first, last + Duration::hours(3))
    } else {
        (first, last)
    }
}

fn save_temperature_png(path: &Path, series: &ForecastSeries) -> Result<()> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (t0, t1) = time_bounds(series.timestamps());
    let (y_lo, y_hi) = padded_value_range(series.temperatures());

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(RangedDateTime::from(t0..t1), y_lo..y_hi)?;

    let points = || {
        series
            .timestamps()
            .iter()
            .copied()
            .zip(series.temperatures().iter().copied())
    };

    chart.draw_series(LineSeries::new(points(), BLUE.stroke_width(2)))?;
    chart.draw_series(points().map(|(t, v)| Circle::new((t, v), 4, BLUE.filled())))?;

    root.present()?;
    Ok(())
}

fn save_humidity_png(path: &Path, series: &ForecastSeries) -> Result<()> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let n = series.len() as f64;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(0.0..n, 0.0..100.0)?;

    chart.draw_series(series.humidities().iter().enumerate().map(|(i, &h)| {
        let x = i as f64;
        Rectangle::new(
            [(x + 0.1, 0.0), (x + 0.9, f64::from(h))],
            BLUE.mix(0.6).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

fn save_scatter_png(path: &Path, series: &ForecastSeries) -> Result<()> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (t0, t1) = time_bounds(series.timestamps());
    let (y_lo, y_hi) = padded_value_range(series.temperatures());

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(RangedDateTime::from(t0..t1), y_lo..y_hi)?;

    // One color per sample index, cycling through the palette.
    chart.draw_series(
        series
            .timestamps()
            .iter()
            .copied()
            .zip(series.temperatures().iter().copied())
            .enumerate()
            .map(|(i, (t, v))| Circle::new((t, v), 5, Palette99::pick(i).filled())),
    )?;

    root.present()?;
    Ok(())
}
