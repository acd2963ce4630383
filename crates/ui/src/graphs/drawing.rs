//! egui painter for [`BarChart`]: the embedded (Panel mode) rendering of the
//! comparison charts. Layout mirrors the exported SVG.

use std::f32::consts::FRAC_PI_2;

use bevy_egui::egui;
use rendering::format::format_tick;
use rendering::palette::{BACKGROUND, HEADING, INK};
use rendering::BarChart;

use crate::theme::color32;

/// Plot area insets as fractions of the chart rect: left, right, top, bottom.
const INSET_LEFT: f32 = 0.17;
const INSET_RIGHT: f32 = 0.04;
const INSET_TOP: f32 = 0.12;
const INSET_BOTTOM: f32 = 0.14;

const TICK_LENGTH: f32 = 4.0;
const CATEGORY_ANGLE: f32 = -15.0 * std::f32::consts::PI / 180.0;

/// Plot rect inside `rect` after leaving room for title and axis text.
pub(crate) fn plot_rect(rect: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        egui::pos2(
            rect.min.x + rect.width() * INSET_LEFT,
            rect.min.y + rect.height() * INSET_TOP,
        ),
        egui::pos2(
            rect.max.x - rect.width() * INSET_RIGHT,
            rect.max.y - rect.height() * INSET_BOTTOM,
        ),
    )
}

/// Screen position of data point (`x`, `y`) inside `plot`.
pub(crate) fn to_screen(chart: &BarChart, plot: egui::Rect, x: f64, y: f64) -> egui::Pos2 {
    egui::pos2(
        plot.min.x + chart.x_fraction(x) as f32 * plot.width(),
        plot.max.y - chart.y_fraction(y) as f32 * plot.height(),
    )
}

fn rotated_text(
    painter: &egui::Painter,
    pos: egui::Pos2,
    text: &str,
    font: egui::FontId,
    color: egui::Color32,
    angle: f32,
) {
    let galley = painter.layout_no_wrap(text.to_string(), font, color);
    painter.add(egui::epaint::TextShape::new(pos, galley, color).with_angle(angle));
}

pub(crate) fn draw_bar_chart(ui: &mut egui::Ui, chart: &BarChart, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, color32(BACKGROUND));

    let plot = plot_rect(rect);
    let ink = color32(INK);
    let heading = color32(HEADING);
    let stroke = egui::Stroke::new(1.0, ink);
    let tick_font = egui::FontId::proportional(11.0);

    // Bars
    for bar in &chart.bars {
        let top_left = to_screen(chart, plot, bar.left(), bar.height.max(0.0));
        let bottom_right = to_screen(chart, plot, bar.right(), 0.0);
        painter.rect_filled(
            egui::Rect::from_min_max(top_left, bottom_right),
            0.0,
            color32(bar.color),
        );
    }

    // Value annotations
    for note in &chart.annotations {
        painter.text(
            to_screen(chart, plot, note.x, note.y),
            egui::Align2::CENTER_BOTTOM,
            &note.text,
            egui::FontId::proportional(12.0),
            ink,
        );
    }

    // Spines
    painter.line_segment([plot.left_top(), plot.left_bottom()], stroke);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], stroke);

    // Y ticks
    let step = chart.tick_step();
    for &tick in &chart.y_ticks {
        let y = to_screen(chart, plot, chart.x_min, tick).y;
        painter.line_segment(
            [
                egui::pos2(plot.min.x - TICK_LENGTH, y),
                egui::pos2(plot.min.x, y),
            ],
            stroke,
        );
        painter.text(
            egui::pos2(plot.min.x - TICK_LENGTH - 2.0, y),
            egui::Align2::RIGHT_CENTER,
            format_tick(tick, step),
            tick_font.clone(),
            ink,
        );
    }

    // Category ticks and tilted labels
    for bar in &chart.bars {
        let x = to_screen(chart, plot, bar.center, 0.0).x;
        painter.line_segment(
            [
                egui::pos2(x, plot.max.y),
                egui::pos2(x, plot.max.y + TICK_LENGTH),
            ],
            stroke,
        );
        let width = painter
            .layout_no_wrap(bar.category.clone(), tick_font.clone(), ink)
            .size()
            .x;
        // Anchor the label's right end under the tick, tilted up to the left.
        let start = egui::pos2(
            x - width * CATEGORY_ANGLE.cos(),
            plot.max.y + TICK_LENGTH + 2.0 - width * CATEGORY_ANGLE.sin(),
        );
        rotated_text(
            &painter,
            start,
            &bar.category,
            tick_font.clone(),
            ink,
            CATEGORY_ANGLE,
        );
    }

    // Y-axis label, reading bottom to top
    let label_font = egui::FontId::proportional(13.0);
    let label_width = painter
        .layout_no_wrap(chart.y_label.clone(), label_font.clone(), heading)
        .size()
        .x;
    rotated_text(
        &painter,
        egui::pos2(rect.min.x + 4.0, plot.center().y + label_width / 2.0),
        &chart.y_label,
        label_font,
        heading,
        -FRAC_PI_2,
    );

    // Title
    painter.text(
        egui::pos2(plot.center().x, (rect.min.y + plot.min.y) / 2.0),
        egui::Align2::CENTER_CENTER,
        &chart.title,
        egui::FontId::proportional(16.0),
        heading,
    );
}
