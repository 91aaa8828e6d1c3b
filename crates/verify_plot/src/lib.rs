//! Line charts of benchmark timings, rendered to PNG with plotters.

use std::{
    fmt::Display,
    ops::Range,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use tracing::info;
use verify_core::timing::{read_size_timings, read_thread_timings, SizeTiming, ThreadSeries};

const X_LABEL: &str = "Matrix size (N x N)";
const Y_LABEL: &str = "Time (microseconds)";

/// Whether a chart file was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotOutcome {
    Written(PathBuf),
    /// Nothing valid to plot; no file was created.
    Skipped,
}

/// Reads a `<size> <time>` log and plots a single series.
pub fn plot_size_timings(timing_file: &Path, plot_file: &Path) -> Result<PlotOutcome> {
    let records = read_size_timings(timing_file)?;
    render_size_chart(&records, plot_file)?;
    info!(path = %plot_file.display(), points = records.len(), "timing plot saved");
    Ok(PlotOutcome::Written(plot_file.to_path_buf()))
}

/// Reads a `<threads> <size> <time>` log and plots one series per thread count.
pub fn plot_thread_timings(timing_file: &Path, plot_file: &Path) -> Result<PlotOutcome> {
    let series = read_thread_timings(timing_file)?;
    if series.is_empty() {
        info!(log = %timing_file.display(), "no valid timing data found");
        return Ok(PlotOutcome::Skipped);
    }
    render_thread_chart(&series, plot_file)?;
    info!(
        path = %plot_file.display(),
        series = series.len(),
        "timing plots saved"
    );
    Ok(PlotOutcome::Written(plot_file.to_path_buf()))
}

pub fn render_size_chart(records: &[SizeTiming], path: &Path) -> Result<()> {
    let points: Vec<(f64, f64)> = records.iter().map(to_point).collect();

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Matrix Multiplication Time vs Size", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(
            axis_range(points.iter().map(|p| p.0)),
            axis_range(points.iter().map(|p| p.1)),
        )
        .map_err(draw_err)?;
    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(2)))
        .map_err(draw_err)?;
    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 4, BLUE.filled())))
        .map_err(draw_err)?;

    root.present()
        .map_err(|err| anyhow!("failed to save chart to {}: {err}", path.display()))?;
    Ok(())
}

pub fn render_thread_chart(series: &ThreadSeries, path: &Path) -> Result<()> {
    let all_points = || series.values().flatten().map(to_point);

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("OpenMP Matrix Multiplication Performance", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(
            axis_range(all_points().map(|p| p.0)),
            axis_range(all_points().map(|p| p.1)),
        )
        .map_err(draw_err)?;
    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(draw_err)?;

    for (idx, (threads, records)) in series.iter().enumerate() {
        let color = Palette99::pick(idx).mix(1.0);
        let points: Vec<(f64, f64)> = records.iter().map(to_point).collect();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
            .map_err(draw_err)?
            .label(format!("{threads} threads"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart
            .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
            .map_err(draw_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;

    root.present()
        .map_err(|err| anyhow!("failed to save chart to {}: {err}", path.display()))?;
    Ok(())
}

fn to_point(record: &SizeTiming) -> (f64, f64) {
    (record.size as f64, record.time_us as f64)
}

/// Data range padded by 5%; degenerate ranges are widened so the axis stays drawable.
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    if span == 0.0 {
        let pad = min.abs().max(1.0) * 0.05;
        return (min - pad)..(max + pad);
    }
    (min - span * 0.05)..(max + span * 0.05)
}

fn draw_err<E: Display>(err: E) -> anyhow::Error {
    anyhow!("failed to draw chart: {err}")
}
