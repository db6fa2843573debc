use anyhow::{anyhow, Result};
use plotters::prelude::*;

use crate::model::Statistics;

const CHART_SIZE: (u32, u32) = (640, 480);

/// Bar chart of the two run averages. Rendering failures are surfaced to the
/// caller but never invalidate the tabular output.
pub fn render_averages(path: &str, statistics: &Statistics) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("filling chart background: {e}"))?;
    let ceiling = statistics.average_score.max(statistics.average_comments).max(1.0) * 1.1;
    let mut chart = ChartBuilder::on(&root)
        .caption("Top story averages", ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(32)
        .y_label_area_size(48)
        .build_cartesian_2d(0.0f64..2.0, 0.0f64..ceiling)
        .map_err(|e| anyhow!("building averages chart: {e}"))?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(2)
        .x_label_formatter(&|x| {
            if *x < 1.0 { "avg score".to_string() } else { "avg comments".to_string() }
        })
        .draw()
        .map_err(|e| anyhow!("drawing averages mesh: {e}"))?;
    chart
        .draw_series([
            Rectangle::new([(0.15, 0.0), (0.85, statistics.average_score)], BLUE.filled()),
            Rectangle::new([(1.15, 0.0), (1.85, statistics.average_comments)], RED.filled()),
        ])
        .map_err(|e| anyhow!("drawing averages bars: {e}"))?;
    root.present().map_err(|e| anyhow!("writing {path}: {e}"))?;
    Ok(())
}

/// 24-bucket histogram of comment activity by UTC hour of day.
pub fn render_hour_histogram(path: &str, buckets: &[u64; 24]) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("filling chart background: {e}"))?;
    let peak = buckets.iter().copied().max().unwrap_or(0).max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption("Comment activity by hour (UTC)", ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(32)
        .y_label_area_size(48)
        .build_cartesian_2d(0u32..24u32, 0u64..peak + peak / 10 + 1)
        .map_err(|e| anyhow!("building hour histogram: {e}"))?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .draw()
        .map_err(|e| anyhow!("drawing histogram mesh: {e}"))?;
    chart
        .draw_series(buckets.iter().enumerate().map(|(hour, &count)| {
            Rectangle::new([(hour as u32, 0u64), (hour as u32 + 1, count)], BLUE.filled())
        }))
        .map_err(|e| anyhow!("drawing histogram bars: {e}"))?;
    root.present().map_err(|e| anyhow!("writing {path}: {e}"))?;
    Ok(())
}
