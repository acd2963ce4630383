//! Individual section renderers for the dashboard.

use bevy::prelude::*;
use bevy_egui::egui;

use rendering::palette::{DARK_BLUE, DARK_TEAL, VIBRANT_GREEN};
use rendering::{ComparisonCharts, ExportChartRequest, Metric, StatusMessage};
use simulation::DashboardLabels;

use crate::graphs::draw_comparison_panels;
use crate::logos::{draw_logo_row, LogoRow};
use crate::theme::color32;

use super::types::MetricCard;

const CARDS_PER_ROW: usize = 3;

pub fn render_header(ui: &mut egui::Ui, labels: &DashboardLabels) {
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(labels.page_title.as_str())
            .size(28.0)
            .strong()
            .color(color32(DARK_TEAL)),
    );
    ui.label(
        egui::RichText::new(labels.page_subtitle.as_str())
            .size(18.0)
            .color(color32(DARK_BLUE)),
    );
    ui.add_space(4.0);
    ui.label(labels.page_intro.as_str());
}

fn render_card(ui: &mut egui::Ui, card: &MetricCard) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, color32(VIBRANT_GREEN)))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(card.label.as_str());
            ui.label(egui::RichText::new(card.value.as_str()).size(22.0).strong());
            ui.small(card.caption.as_str());
        });
}

/// Cards in rows of three.
pub fn render_metric_cards(ui: &mut egui::Ui, labels: &DashboardLabels, cards: &[MetricCard]) {
    ui.heading(labels.results_header.as_str());
    for row in cards.chunks(CARDS_PER_ROW) {
        ui.columns(CARDS_PER_ROW, |columns| {
            for (column, card) in columns.iter_mut().zip(row) {
                render_card(column, card);
            }
        });
        ui.add_space(6.0);
    }
}

pub fn render_charts(ui: &mut egui::Ui, labels: &DashboardLabels, charts: &ComparisonCharts) {
    ui.heading(labels.charts_header.as_str());
    ui.add_space(4.0);
    draw_comparison_panels(ui, charts);
}

pub fn render_downloads(
    ui: &mut egui::Ui,
    labels: &DashboardLabels,
    requests: &mut EventWriter<ExportChartRequest>,
    status: &StatusMessage,
) {
    ui.heading(labels.downloads_header.as_str());
    ui.horizontal_wrapped(|ui| {
        for metric in Metric::ALL {
            let text = labels.download_text(&metric.file_name(labels));
            if ui.button(text).clicked() {
                requests.send(ExportChartRequest { metric });
            }
        }
    });

    if status.active() {
        let color = if status.is_error {
            egui::Color32::from_rgb(200, 30, 30)
        } else {
            color32(DARK_TEAL)
        };
        ui.colored_label(color, status.text.as_str());
    }
}

pub fn render_footer(ui: &mut egui::Ui, labels: &DashboardLabels, logos: &LogoRow) {
    ui.heading(labels.additional_info_header.as_str());
    ui.label(labels.additional_info.as_str());
    ui.add_space(12.0);

    ui.vertical_centered(|ui| {
        ui.label(labels.attribution.as_str());
        ui.add_space(6.0);
        draw_logo_row(ui, logos, labels);
        ui.add_space(6.0);
        ui.small(labels.location.as_str());
    });
}
