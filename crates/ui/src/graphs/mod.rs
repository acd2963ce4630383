//! Combined three-panel comparison view.

mod drawing;

use bevy_egui::egui;
use rendering::{ChartMode, ComparisonCharts};

pub(crate) use drawing::draw_bar_chart;

const PANEL_GAP: f32 = 8.0;
const MIN_PANEL_WIDTH: f32 = 180.0;

/// Size of one panel when `count` panels share `available_width`, keeping the
/// Panel-mode figure aspect ratio.
pub(crate) fn panel_size(available_width: f32, count: usize) -> egui::Vec2 {
    let count = count.max(1) as f32;
    let width = ((available_width - PANEL_GAP * (count - 1.0)) / count).max(MIN_PANEL_WIDTH);
    let (w_in, h_in) = ChartMode::Panel.figure_size_in();
    egui::vec2(width, width * h_in / w_in)
}

/// Draw every comparison chart side by side.
pub fn draw_comparison_panels(ui: &mut egui::Ui, charts: &ComparisonCharts) {
    let size = panel_size(ui.available_width(), charts.charts.len());
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = PANEL_GAP;
        for (_, chart) in &charts.charts {
            draw_bar_chart(ui, chart, size);
        }
    });
}
