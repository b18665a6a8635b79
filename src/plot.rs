//! Fitness-history line charts.
//!
//! Renders the per-generation best fitness of a finished run as an SVG
//! document through the `plotters` SVG backend.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Result of a chart drawing call.
pub type DrawResult<T> = Result<T, PlotError>;

/// Failure while drawing or saving a chart.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The drawing backend rejected an operation.
    #[error("failed to draw chart: {0}")]
    Drawing(String),

    /// The chart could not be written to disk.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Drawing(err.to_string())
    }
}

/// SVG line chart of a fitness history.
///
/// ```
/// use u_evolve::plot::FitnessChart;
///
/// let svg = FitnessChart::default().render(&[5.0, 3.0, 3.0, 1.0, 0.0]).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Clone)]
pub struct FitnessChart {
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Legend entry for the plotted series.
    pub legend: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for FitnessChart {
    fn default() -> Self {
        Self {
            title: "Fitness History Over Generations".into(),
            x_label: "Generation".into(),
            y_label: "Best Fitness".into(),
            legend: "Best Fitness".into(),
            width: 1000,
            height: 600,
        }
    }
}

impl FitnessChart {
    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the canvas size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Renders `history` as an SVG document.
    ///
    /// Entry `i` is plotted at generation `i`. Non-finite values are skipped;
    /// an empty history yields the axes alone.
    pub fn render(&self, history: &[f64]) -> DrawResult<String> {
        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            self.draw(&root, history)?;
            root.present()?;
        }
        Ok(svg)
    }

    /// Renders `history` and writes it to `path`.
    pub fn write_svg(&self, history: &[f64], path: impl AsRef<Path>) -> DrawResult<()> {
        std::fs::write(path, self.render(history)?)?;
        Ok(())
    }

    fn draw(&self, area: &DrawingArea<SVGBackend<'_>, Shift>, history: &[f64]) -> DrawResult<()> {
        let points: Vec<(f64, f64)> = history
            .iter()
            .enumerate()
            .filter(|(_, fitness)| fitness.is_finite())
            .map(|(generation, &fitness)| (generation as f64, fitness))
            .collect();

        let (y_min, y_max) = y_range(&points);
        let x_max = history.len().saturating_sub(1).max(1) as f64;

        area.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(area)
            .caption(&self.title, ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .draw()?;

        if points.is_empty() {
            return Ok(());
        }

        let color = BLUE;
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(&self.legend)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    }
}

/// Y bounds padded so a flat series still spans the plot.
fn y_range(points: &[(f64, f64)]) -> (f64, f64) {
    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo < f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}
