//! Main dashboard UI system.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::{ComparisonCharts, ExportChartRequest, StatusMessage};
use simulation::{DashboardLabels, ProjectedIndicators};

use crate::logos::LogoRow;

use super::panels;
use super::types::metric_cards;

/// Draws the central panel. Runs after the sidebar so the panel fills the
/// remaining space.
pub fn dashboard_ui(
    mut contexts: EguiContexts,
    labels: Res<DashboardLabels>,
    indicators: Res<ProjectedIndicators>,
    charts: Res<ComparisonCharts>,
    status: Res<StatusMessage>,
    logos: Res<LogoRow>,
    mut requests: EventWriter<ExportChartRequest>,
) {
    let cards = metric_cards(&indicators, &labels);

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                panels::render_header(ui, &labels);

                ui.add_space(8.0);
                ui.separator();

                panels::render_metric_cards(ui, &labels, &cards);

                ui.add_space(8.0);
                ui.separator();

                panels::render_charts(ui, &labels, &charts);

                ui.add_space(8.0);
                ui.separator();

                panels::render_downloads(ui, &labels, &mut requests, &status);

                ui.add_space(8.0);
                ui.separator();

                panels::render_footer(ui, &labels, &logos);
            });
    });
}
