//! Control Panel Widget
//! Left side panel with the input widgets and export buttons.

use crate::params::{
    ChartKind, DashboardProfile, ParameterSet, Pattern, Rgb, MAX_POINTS, MIN_POINTS,
};
use egui::{Color32, ComboBox, RichText};

/// Left side control panel. Owns the widget state the parameter set is read from.
pub struct ControlPanel {
    pub profile: DashboardProfile,
    pub chart_kind: ChartKind,
    pub point_count: usize,
    pub pattern: Pattern,
    pub title: String,
    pub color: [u8; 3],
    pub status: String,
    pub export_enabled: bool,
}

impl ControlPanel {
    pub fn new(profile: DashboardProfile) -> Self {
        let defaults = ParameterSet::defaults_for(profile);
        Self {
            profile,
            chart_kind: defaults.chart_kind,
            point_count: defaults.point_count,
            pattern: defaults.pattern,
            title: defaults.title,
            color: defaults.color.unwrap_or_else(Rgb::default_blue).to_array(),
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }

    /// Current widget values as a fresh parameter set.
    pub fn parameters(&self) -> ParameterSet {
        ParameterSet {
            chart_kind: self.chart_kind,
            point_count: self.point_count,
            pattern: self.pattern,
            title: self.title.clone(),
            color: Some(Rgb(self.color[0], self.color[1], self.color[2])),
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Data Visualizer")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new(self.profile.title())
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Settings Section =====
        ui.label(RichText::new("⚙️ Settings").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 110.0;
        let combo_width = 150.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Chart Type:"));
            ComboBox::from_id_salt("chart_kind")
                .width(combo_width)
                .selected_text(self.chart_kind.label())
                .show_ui(ui, |ui| {
                    for &kind in self.profile.chart_kinds() {
                        ui.selectable_value(&mut self.chart_kind, kind, kind.label());
                    }
                });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Data Points:"));
            ui.add(egui::Slider::new(&mut self.point_count, MIN_POINTS..=MAX_POINTS));
        });

        ui.add_space(10.0);

        ui.label("Data Pattern:");
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                for &pattern in self.profile.patterns() {
                    ui.radio_value(&mut self.pattern, pattern, pattern.label());
                }
            });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Chart Title:"));
            ui.add(egui::TextEdit::singleline(&mut self.title).desired_width(combo_width));
        });

        if self.chart_kind.uses_color() {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.add_sized([label_width, 20.0], egui::Label::new("Choose Color:"));
                ui.color_edit_button_srgb(&mut self.color);
                ui.label(
                    RichText::new(Rgb(self.color[0], self.color[1], self.color[2]).to_hex())
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            });
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.label(RichText::new("💾 Export Data").size(14.0).strong());
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button = egui::Button::new(RichText::new("⬇ Download CSV").size(16.0))
                    .min_size(egui::vec2(200.0, 35.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::DownloadCsv;
                }

                ui.add_space(8.0);

                let png_button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(png_button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Saved") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    DownloadCsv,
    ExportPng,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_panel_reports_profile_defaults() {
        let panel = ControlPanel::new(DashboardProfile::Advanced);
        assert_eq!(panel.parameters(), ParameterSet::defaults_for(DashboardProfile::Advanced));
    }

    #[test]
    fn widget_edits_flow_into_parameters() {
        let mut panel = ControlPanel::new(DashboardProfile::Simple);
        panel.point_count = 75;
        panel.pattern = Pattern::SineWave;
        panel.color = [255, 0, 0];

        let params = panel.parameters();
        assert_eq!(params.point_count, 75);
        assert_eq!(params.pattern, Pattern::SineWave);
        assert_eq!(params.color, Some(Rgb(255, 0, 0)));
    }
}
