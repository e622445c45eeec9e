//! Chart Viewer Widget
//! Central panel: statistics cards, the titled chart and the collapsible data table.

use crate::charts::ChartPlotter;
use crate::params::DashboardProfile;
use crate::pipeline::RenderPassOutput;
use egui::{Color32, RichText, ScrollArea};

const CHART_HEIGHT: f32 = 380.0;

/// Displays the most recent render pass.
pub struct ChartViewer {
    profile: DashboardProfile,
}

impl ChartViewer {
    pub fn new(profile: DashboardProfile) -> Self {
        Self { profile }
    }

    pub fn show(&self, ui: &mut egui::Ui, pass: Option<&RenderPassOutput>) {
        let Some(pass) = pass else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("📊 {}", self.profile.title()))
                        .size(26.0)
                        .strong(),
                );
                ui.label(
                    RichText::new("Create visualizations with your custom inputs!")
                        .color(Color32::GRAY),
                );
                ui.add_space(12.0);

                ui.label(RichText::new("📈 Statistics").size(18.0).strong());
                ui.add_space(6.0);
                ChartPlotter::draw_metrics(ui, &pass.summary.metrics(self.profile.show_std_dev()));

                ui.add_space(16.0);

                ui.label(RichText::new(&pass.output.title).size(18.0).strong());
                ui.add_space(6.0);
                ChartPlotter::draw_chart(ui, "series_chart", &pass.output.encoding, CHART_HEIGHT);

                ui.add_space(12.0);

                egui::CollapsingHeader::new("📋 View Data Table")
                    .default_open(false)
                    .show(ui, |ui| {
                        ChartPlotter::draw_data_table(ui, &pass.output.table);
                    });
            });
    }
}
