//! Renders points and tours into png images.

#[cfg(test)]
#[path = "../../tests/unit/extensions/plot_test.rs"]
mod plot_test;

use crate::extensions::solve::config::PlotConfig;
use crate::extensions::solve::TourPlotter;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use tour_core::models::PointSet;
use tour_core::utils::{GenericError, GenericResult};

type DrawResult<T> = Result<T, Box<dyn Error>>;

/// Draws routes as black polylines over red point markers using a bitmap backend.
pub struct PlottersTourPlotter {
    config: PlotConfig,
}

impl PlottersTourPlotter {
    /// Creates a new instance of `PlottersTourPlotter`.
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }
}

impl TourPlotter for PlottersTourPlotter {
    fn plot(&self, name: &str, points: &PointSet, routes: &[Vec<usize>]) -> GenericResult<()> {
        if points.is_empty() {
            return Err("cannot plot empty point set".into());
        }

        if let Some(node) = routes.iter().flatten().find(|&&node| node >= points.len()) {
            return Err(GenericError::from(format!("route node {node} is out of range of {} points", points.len())));
        }

        std::fs::create_dir_all(&self.config.directory)?;

        draw_tours(&self.config, name, points, routes)
            .map_err(|err| GenericError::from(format!("cannot draw '{name}': {err}")))
    }
}

fn draw_tours(config: &PlotConfig, name: &str, points: &PointSet, routes: &[Vec<usize>]) -> DrawResult<()> {
    let path = config.directory.join(format!("{name}.png"));
    let (x_range, y_range) = get_axis_ranges(points);

    let area = BitMapBackend::new(&path, (config.width, config.height)).into_drawing_area();
    area.fill(&WHITE)?;

    let margin = (config.marker_size * 2).max(10);
    let mut chart = ChartBuilder::on(&area).margin(margin).build_cartesian_2d(x_range, y_range)?;

    let line_style = BLACK.stroke_width(config.line_width);
    chart.draw_series(routes.iter().filter(|route| route.len() > 1).map(|route| {
        PathElement::new(route.iter().filter_map(|&node| get_point(points, node)).collect::<Vec<_>>(), line_style)
    }))?;

    chart.draw_series(points.iter().map(|(x, y)| Circle::new((x as f64, y as f64), config.marker_size, RED.filled())))?;

    area.present()?;

    Ok(())
}

fn get_point(points: &PointSet, node: usize) -> Option<(f64, f64)> {
    points.get(node).map(|(x, y)| (x as f64, y as f64))
}

/// Returns axis ranges with a small padding, degenerated ranges are widened.
fn get_axis_ranges(points: &PointSet) -> (Range<f64>, Range<f64>) {
    let ((min_x, min_y), (max_x, max_y)) = points.bounds().unwrap_or(((0, 0), (1, 1)));

    (pad_range(min_x as f64, max_x as f64), pad_range(min_y as f64, max_y as f64))
}

fn pad_range(min: f64, max: f64) -> Range<f64> {
    let padding = ((max - min) * 0.05).max(1.);

    (min - padding)..(max + padding)
}
