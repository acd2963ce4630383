use bevy_egui::{egui, EguiContexts};
use rendering::palette::{Rgb, DARK_BLUE, DARK_TEAL, LIGHT_BLUE, VIBRANT_GREEN, WHITE};

pub fn color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

/// Light dashboard theme: white panels, teal text, green accents.
pub fn apply_dashboard_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let panel = color32(WHITE);
    let sidebar = egui::Color32::from_rgb(240, 246, 246);
    let inactive = egui::Color32::from_rgb(222, 234, 235);
    let hover = egui::Color32::from_rgb(200, 240, 214);
    let active = color32(VIBRANT_GREEN);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = sidebar;
    style.visuals.extreme_bg_color = panel;
    style.visuals.faint_bg_color = sidebar;
    style.visuals.override_text_color = Some(color32(DARK_TEAL));
    style.visuals.hyperlink_color = color32(LIGHT_BLUE);

    // Slider rail fill and selection
    style.visuals.selection.bg_fill = color32(DARK_TEAL);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, color32(DARK_BLUE));

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
