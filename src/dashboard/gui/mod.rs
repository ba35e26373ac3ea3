//! The dashboard window.
//!
//! Controls live in the left panel; every change reported by
//! [`render_filters`] is dispatched once through the controller before the
//! charts are drawn in the same frame.

use super::controller::DashboardController;
use super::logic::{Dataset, Filters, OutputId};
use super::model::DashboardModel;
use crate::config::DashboardConfig;
use eframe::egui;
use std::sync::Arc;

mod choropleth;
mod controls;
mod plots;

pub use controls::render_filters;
use plots::render_chart;

pub struct App {
    pub model: DashboardModel,
    pub controller: DashboardController,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, dataset: Arc<Dataset>, filters: Filters) -> Self {
        crate::theme::apply_dashboard_theme(&cc.egui_ctx);
        Self::from_dataset(dataset, filters)
    }

    /// Builds the app state and renders every chart once.
    pub fn from_dataset(dataset: Arc<Dataset>, filters: Filters) -> Self {
        let state_options = dataset.state_codes().unwrap_or_else(|e| {
            log::warn!("Could not list state codes: {e}");
            Vec::new()
        });
        let controller = DashboardController::new(dataset);
        let mut model = DashboardModel::new(filters, state_options);
        controller.render_all(&mut model);
        Self { model, controller }
    }

    fn render_chart_card(&self, ui: &mut egui::Ui, output: OutputId) {
        crate::theme::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            match self.model.chart(output) {
                Some(spec) => render_chart(ui, output, spec),
                None => {
                    ui.label(egui::RichText::new("Chart unavailable.").weak());
                }
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("dashboard_title").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("U.S. Job Postings Visualization");
            });
        });

        egui::TopBottomPanel::bottom("dashboard_footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{} postings loaded",
                        self.controller.dataset().len()
                    ))
                    .weak()
                    .small(),
                );
                if let Some(duration) = self.model.last_duration {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("updated in {duration:.2?}"))
                            .weak()
                            .small(),
                    );
                }
                if !self.model.status.is_empty() {
                    ui.separator();
                    ui.colored_label(ui.visuals().error_fg_color, &self.model.status);
                }
            });
        });

        egui::SidePanel::left("dashboard_filters")
            .frame(crate::theme::sidebar_frame())
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("filters_scroll")
                    .show(ui, |ui| {
                        for input in render_filters(&mut self.model, ui) {
                            self.controller.on_input(&mut self.model, input);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("charts_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.render_chart_card(ui, OutputId::MedianSalaryMap);
                    ui.add_space(crate::theme::SPACING_MEDIUM);
                    ui.columns(3, |columns| {
                        if let [left, middle, right] = columns {
                            self.render_chart_card(left, OutputId::AverageSalaryByRegion);
                            self.render_chart_card(middle, OutputId::SalaryRangeByRegion);
                            self.render_chart_card(right, OutputId::JobsByRegion);
                        }
                    });
                });
        });
    }
}

/// Opens the dashboard window and blocks until it is closed.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn run(dataset: Arc<Dataset>, config: &DashboardConfig) -> anyhow::Result<()> {
    let filters = config.initial_filters.to_filters();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        &config.window.title,
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, dataset, filters)))),
    )
    .map_err(|e| anyhow::anyhow!("Dashboard window failed: {e}"))
}
