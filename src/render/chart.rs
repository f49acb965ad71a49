//! Scatter chart of a processed population using plotters

use super::layer::{build_layers, Layer};
use crate::config::RenderConfig;
use crate::error::{MatrixError, Result};
use crate::pipeline::Population;
use crate::risk::{Band, Rgb};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use tracing::info;

/// Axis range around the 0..4 grid
const AXIS_RANGE: std::ops::Range<f64> = -0.5..4.5;

/// Width of the legend panel to the right of the plot
const LEGEND_WIDTH: u32 = 160;

const OUTLINE_ALPHA: f64 = 0.8;

/// Axis descriptions
pub const IMPACT_AXIS_TITLE: &str = "Impact Level";
pub const LIKELIHOOD_AXIS_TITLE: &str = "Likelihood Level";
pub const LEGEND_TITLE: &str = "Risk Level";

fn to_plotters(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Band name for an integer grid tick, empty elsewhere.
pub fn band_tick_label(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    Band::from_index(rounded as usize)
        .map(|b| b.label().to_string())
        .unwrap_or_default()
}

/// Render a population to the configured output file.
pub fn render_population(population: &Population, config: &RenderConfig) -> Result<()> {
    let layers = build_layers(population.records());
    let size = (config.width, config.height);

    let outcome = if config.is_svg() {
        draw_matrix(SVGBackend::new(&config.output, size).into_drawing_area(), &layers, config)
    } else {
        draw_matrix(BitMapBackend::new(&config.output, size).into_drawing_area(), &layers, config)
    };
    outcome.map_err(|e| MatrixError::Render(e.to_string()))?;

    info!(
        "Wrote {} points in {} layers to {:?}",
        layers.iter().map(|l| l.len()).sum::<usize>(),
        layers.len(),
        config.output
    );
    Ok(())
}

/// Render a population to an in-memory SVG document.
pub fn render_svg_string(population: &Population, config: &RenderConfig) -> Result<String> {
    let layers = build_layers(population.records());
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (config.width, config.height))
            .into_drawing_area();
        draw_matrix(root, &layers, config).map_err(|e| MatrixError::Render(e.to_string()))?;
    }
    Ok(buffer)
}

fn draw_matrix<DB>(
    root: DrawingArea<DB, Shift>,
    layers: &[Layer],
    config: &RenderConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let legend_width = LEGEND_WIDTH.min(config.width / 3);
    let (plot_area, legend_area) = root.split_horizontally(config.width - legend_width);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(&config.title, ("sans-serif", 18))
        .margin(12)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(AXIS_RANGE, AXIS_RANGE)?;

    chart
        .configure_mesh()
        .x_labels(Band::ALL.len())
        .y_labels(Band::ALL.len())
        .x_label_formatter(&|v| band_tick_label(*v))
        .y_label_formatter(&|v| band_tick_label(*v))
        .x_desc(IMPACT_AXIS_TITLE)
        .y_desc(LIKELIHOOD_AXIS_TITLE)
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(WHITE)
        .draw()?;

    let radius = config.marker_size;
    for layer in layers {
        let fill = to_plotters(layer.color()).mix(layer.alpha()).filled();
        let outline = BLACK.mix(OUTLINE_ALPHA).stroke_width(1);
        chart.draw_series(layer.points.iter().map(|&point| {
            EmptyElement::at(point)
                + Circle::new((0, 0), radius, fill)
                + Circle::new((0, 0), radius, outline)
        }))?;
    }

    draw_legend(&legend_area)?;

    root.present()?;
    Ok(())
}

/// Opaque swatch per risk band, outside the plot area
fn draw_legend<DB>(area: &DrawingArea<DB, Shift>) -> std::result::Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    area.draw(&Text::new(LEGEND_TITLE, (12, 48), ("sans-serif", 16)))?;

    for (i, band) in Band::ALL.iter().enumerate() {
        let y = 84 + i as i32 * 26;
        let color = to_plotters(band.color());
        area.draw(&Circle::new((22, y), 7, color.filled()))?;
        area.draw(&Circle::new((22, y), 7, BLACK.stroke_width(1)))?;
        area.draw(&Text::new(band.label(), (36, y - 7), ("sans-serif", 14)))?;
    }

    Ok(())
}
