//! Static Chart Renderer
//! Draws an encoding with plotters into an RGB buffer and encodes it as PNG.
//!
//! Layout:
//! 1. Title centered on top (when labels are enabled)
//! 2. Plot area with axis descriptions
//! 3. Series drawn per encoding (line, filled area, bars, colored points, histogram)

use crate::charts::{Encoding, RenderOutput};
use crate::params::Rgb;
use image::{DynamicImage, ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Nothing to draw")]
    EmptyEncoding,
    #[error("Drawing error: {0}")]
    Drawing(String),
    #[error("Pixel buffer does not match {0}x{1}")]
    Buffer(u32, u32),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn drawing<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Drawing(err.to_string())
}

fn rgb_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

const HISTOGRAM_FILL: RGBColor = RGBColor(99, 110, 250);

pub struct StaticChartRenderer {
    width: u32,
    height: u32,
    labels: bool,
}

impl Default for StaticChartRenderer {
    fn default() -> Self {
        Self::new(1200, 700)
    }
}

impl StaticChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            labels: true,
        }
    }

    /// Toggle the caption and axis labels. Disabled output needs no system fonts.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Render the chart to PNG bytes.
    pub fn render_png(&self, output: &RenderOutput) -> Result<Vec<u8>, RenderError> {
        let mut pixels = vec![0u8; self.width as usize * self.height as usize * 3];
        self.draw(&mut pixels, &output.title, &output.encoding)?;

        let img = RgbImage::from_raw(self.width, self.height, pixels)
            .ok_or(RenderError::Buffer(self.width, self.height))?;
        let mut bytes: Vec<u8> = Vec::new();
        DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart and write it to `path`.
    pub fn save_png(&self, output: &RenderOutput, path: &Path) -> Result<(), RenderError> {
        let bytes = self.render_png(output)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn draw(&self, pixels: &mut [u8], title: &str, encoding: &Encoding) -> Result<(), RenderError> {
        let (x0, x1, y0, y1) = Self::padded_bounds(encoding)?;
        let (x_desc, y_desc) = encoding.axis_labels();

        let root = BitMapBackend::with_buffer(pixels, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(drawing)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(20);
        if self.labels {
            builder
                .caption(title, ("sans-serif", 26))
                .x_label_area_size(40)
                .y_label_area_size(60);
        }
        let mut chart = builder.build_cartesian_2d(x0..x1, y0..y1).map_err(drawing)?;

        if self.labels {
            chart
                .configure_mesh()
                .x_desc(x_desc)
                .y_desc(y_desc)
                .draw()
                .map_err(drawing)?;
        }

        match encoding {
            Encoding::Line { points, color } => {
                let color = rgb_color(*color);
                chart
                    .draw_series(LineSeries::new(
                        points.iter().map(|&[x, y]| (x, y)),
                        color.stroke_width(2),
                    ))
                    .map_err(drawing)?;
            }
            Encoding::Area { points, color } => {
                let color = rgb_color(*color);
                chart
                    .draw_series(
                        AreaSeries::new(points.iter().map(|&[x, y]| (x, y)), 0.0, color.mix(0.35))
                            .border_style(color.stroke_width(2)),
                    )
                    .map_err(drawing)?;
            }
            Encoding::Bar { points, color } => {
                let color = rgb_color(*color);
                chart
                    .draw_series(points.iter().map(|&[x, y]| {
                        Rectangle::new([(x - 0.4, 0.0), (x + 0.4, y)], color.filled())
                    }))
                    .map_err(drawing)?;
            }
            Encoding::Scatter { points, .. } => {
                chart
                    .draw_series(points.iter().map(|p| {
                        Circle::new((p.x, p.y), 4, rgb_color(p.color).filled())
                    }))
                    .map_err(drawing)?;
            }
            Encoding::Histogram { bins } => {
                chart
                    .draw_series(bins.iter().map(|bin| {
                        let inset = bin.width() * 0.025;
                        Rectangle::new(
                            [(bin.start + inset, 0.0), (bin.end - inset, bin.count as f64)],
                            HISTOGRAM_FILL.filled(),
                        )
                    }))
                    .map_err(drawing)?;
            }
        }

        root.present().map_err(drawing)?;
        Ok(())
    }

    /// Encoding bounds with 5% vertical headroom and no zero-width axes.
    fn padded_bounds(encoding: &Encoding) -> Result<(f64, f64, f64, f64), RenderError> {
        let (mut x0, mut x1, mut y0, mut y1) =
            encoding.bounds().ok_or(RenderError::EmptyEncoding)?;
        if x0 == x1 {
            x0 -= 0.5;
            x1 += 0.5;
        }
        if y0 == y1 {
            y0 -= 0.5;
            y1 += 0.5;
        }
        let pad = (y1 - y0) * 0.05;
        Ok((x0, x1, y0 - pad, y1 + pad))
    }
}
