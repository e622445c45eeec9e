//! Chart Plotter Module
//! Draws encodings, metric cards and the data table with egui / egui_plot.

use crate::charts::{ColoredPoint, Encoding, HistogramBin};
use crate::params::Rgb;
use crate::stats::Metric;
use egui::{Color32, RichText, ScrollArea};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};
use polars::prelude::DataFrame;

/// Histogram bar color
pub const HISTOGRAM_COLOR: Color32 = Color32::from_rgb(99, 110, 250);
const TABLE_MAX_HEIGHT: f32 = 260.0;

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Creates the interactive chart and its companions.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw an encoding as an interactive plot.
    pub fn draw_chart(ui: &mut egui::Ui, id: &str, encoding: &Encoding, height: f32) {
        let (x_label, y_label) = encoding.axis_labels();

        Plot::new(id)
            .height(height)
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .allow_scroll(false)
            .show(ui, |plot_ui| match encoding {
                Encoding::Line { points, color } => {
                    plot_ui.line(
                        Line::new(PlotPoints::from(points.clone()))
                            .color(to_color32(*color))
                            .width(2.0)
                            .name("Y"),
                    );
                }
                Encoding::Area { points, color } => {
                    let color = to_color32(*color);
                    plot_ui.line(
                        Line::new(PlotPoints::from(points.clone()))
                            .color(color)
                            .fill(0.0)
                            .width(1.5)
                            .name("Y"),
                    );
                }
                Encoding::Bar { points, color } => {
                    let bars: Vec<Bar> = points
                        .iter()
                        .map(|&[x, y]| Bar::new(x, y).width(0.8))
                        .collect();
                    plot_ui.bar_chart(BarChart::new(bars).color(to_color32(*color)).name("Y"));
                }
                Encoding::Scatter { points, .. } => {
                    for point in points {
                        plot_ui.points(Self::scatter_point(point));
                    }
                }
                Encoding::Histogram { bins } => {
                    plot_ui.bar_chart(
                        BarChart::new(Self::histogram_bars(bins))
                            .color(HISTOGRAM_COLOR)
                            .name("Count"),
                    );
                }
            });
    }

    fn scatter_point(point: &ColoredPoint) -> Points {
        Points::new(PlotPoints::from(vec![[point.x, point.y]]))
            .radius(4.0)
            .color(to_color32(point.color))
    }

    fn histogram_bars(bins: &[HistogramBin]) -> Vec<Bar> {
        bins.iter()
            .map(|bin| {
                Bar::new(bin.center(), bin.count as f64)
                    .width(bin.width() * 0.95)
                    .name(format!("{:.2} - {:.2}", bin.start, bin.end))
            })
            .collect()
    }

    /// Draw the metric cards side by side.
    pub fn draw_metrics(ui: &mut egui::Ui, metrics: &[Metric]) {
        ui.columns(metrics.len().max(1), |columns| {
            for (col, metric) in columns.iter_mut().zip(metrics) {
                egui::Frame::none()
                    .fill(col.visuals().widgets.noninteractive.bg_fill)
                    .rounding(5.0)
                    .inner_margin(8.0)
                    .show(col, |ui| {
                        ui.label(RichText::new(metric.label).size(12.0).color(Color32::GRAY));
                        ui.label(RichText::new(&metric.value).size(22.0).strong());
                    });
            }
        });
    }

    /// Draw every row of the `X`/`Y` table.
    pub fn draw_data_table(ui: &mut egui::Ui, table: &DataFrame) {
        let (Ok(x_col), Ok(y_col)) = (table.column("X"), table.column("Y")) else {
            ui.label("No Data");
            return;
        };
        let (Ok(x_ca), Ok(y_ca)) = (x_col.i64(), y_col.f64()) else {
            ui.label("No Data");
            return;
        };

        ScrollArea::vertical()
            .max_height(TABLE_MAX_HEIGHT)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id("data_table"))
                    .striped(true)
                    .min_col_width(80.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("X").strong().size(11.0));
                        ui.label(RichText::new("Y").strong().size(11.0));
                        ui.end_row();

                        for (x, y) in x_ca.into_iter().zip(y_ca.into_iter()) {
                            let cell = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
                            ui.label(RichText::new(cell(x.map(|v| v.to_string()))).size(11.0));
                            ui.label(RichText::new(cell(y.map(|v| format!("{v:.6}")))).size(11.0));
                            ui.end_row();
                        }
                    });
            });
    }
}
