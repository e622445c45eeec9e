//! Data Visualizer Main Application
//! Main window with control panel and chart viewer.

use crate::charts::StaticChartRenderer;
use crate::config::AppConfig;
use crate::data::CSV_MIME;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::params::ParameterSet;
use crate::pipeline::{RenderPass, RenderPassOutput};
use anyhow::{Context, Result};
use egui::SidePanel;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const PNG_FILE_NAME: &str = "chart.png";

/// Main application window.
pub struct DataVisualizerApp {
    config: AppConfig,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Latest render pass and the parameters it was built from
    last_params: Option<ParameterSet>,
    pass: Option<RenderPassOutput>,
}

impl DataVisualizerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            control_panel: ControlPanel::new(config.profile),
            chart_viewer: ChartViewer::new(config.profile),
            config,
            last_params: None,
            pass: None,
        }
    }

    /// Rerun the whole pipeline when any widget value changed.
    fn refresh(&mut self) {
        let params = self.control_panel.parameters();
        if self.last_params.as_ref() == Some(&params) {
            return;
        }

        match RenderPass::run(&params, self.config.profile, self.config.seed) {
            Ok(pass) => {
                self.pass = Some(pass);
                self.control_panel.export_enabled = true;
                self.control_panel.set_status("Ready");
            }
            Err(e) => {
                warn!("render pass rejected: {e}");
                self.pass = None;
                self.control_panel.export_enabled = false;
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
        self.last_params = Some(params);
    }

    /// Ask for a target path with a save dialog.
    fn pick_save_path(filter: &str, extension: &str, file_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter(filter, &[extension])
            .set_file_name(file_name)
            .save_file()
    }

    /// Handle CSV download - write the bytes of the current pass
    fn handle_download_csv(&mut self) {
        let Some(pass) = &self.pass else {
            self.control_panel.set_status("No data to export");
            return;
        };

        let Some(path) = Self::pick_save_path("CSV Files", "csv", self.config.profile.csv_file_name())
        else {
            return; // User cancelled
        };

        match Self::write_file(&path, &pass.output.csv) {
            Ok(()) => {
                info!(path = %path.display(), mime = CSV_MIME, rows = pass.series.len(), "csv exported");
                self.control_panel
                    .set_status(&format!("Saved {} rows to {}", pass.series.len(), path.display()));
            }
            Err(e) => {
                warn!("csv export failed: {e:#}");
                self.control_panel.set_status(&format!("Error: {:#}", e));
            }
        }
    }

    /// Handle PNG export - render the chart with plotters and save it
    fn handle_export_png(&mut self) {
        let Some(pass) = &self.pass else {
            self.control_panel.set_status("No chart to export");
            return;
        };

        let Some(path) = Self::pick_save_path("PNG Image", "png", PNG_FILE_NAME) else {
            return;
        };

        let result = StaticChartRenderer::default()
            .render_png(&pass.output)
            .context("Failed to render chart")
            .and_then(|bytes| Self::write_file(&path, &bytes));

        match result {
            Ok(()) => {
                info!(path = %path.display(), "chart image exported");
                self.control_panel
                    .set_status(&format!("Saved chart to {}", path.display()));
            }
            Err(e) => {
                warn!("png export failed: {e:#}");
                self.control_panel.set_status(&format!("Error: {:#}", e));
            }
        }
    }

    fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

impl eframe::App for DataVisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);
                    self.refresh();

                    match action {
                        ControlPanelAction::DownloadCsv => self.handle_download_csv(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, self.pass.as_ref());
        });
    }
}
