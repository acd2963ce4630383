//! SVG document for a [`BarChart`], laid out in points (1/72 inch).

use std::fmt::Write;

use crate::chart::{BarChart, ChartMode};
use crate::format::format_tick;
use crate::palette::{BACKGROUND, HEADING, INK};

pub const POINTS_PER_INCH: f32 = 72.0;

const FONT_FAMILY: &str = "DejaVu Sans, Arial, Helvetica, sans-serif";

/// Plot area as fractions of the figure: left, right, bottom, top.
const SUBPLOT_LEFT: f32 = 0.14;
const SUBPLOT_RIGHT: f32 = 0.95;
const SUBPLOT_BOTTOM: f32 = 0.16;
const SUBPLOT_TOP: f32 = 0.88;

const TICK_LENGTH: f32 = 3.5;
const CATEGORY_ROTATION_DEG: f32 = 15.0;

struct FontSizes {
    title: f32,
    axis_label: f32,
    tick: f32,
    annotation: f32,
}

fn font_sizes(mode: ChartMode) -> FontSizes {
    match mode {
        ChartMode::Panel => FontSizes {
            title: 14.0,
            axis_label: 11.0,
            tick: 9.0,
            annotation: 10.0,
        },
        ChartMode::Standalone => FontSizes {
            title: 15.0,
            axis_label: 12.0,
            tick: 10.0,
            annotation: 11.0,
        },
    }
}

/// Figure size in points.
pub fn figure_size_pt(mode: ChartMode) -> (f32, f32) {
    let (w, h) = mode.figure_size_in();
    (w * POINTS_PER_INCH, h * POINTS_PER_INCH)
}

/// Escape text for inclusion in SVG character data or attribute values.
pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render `chart` as a standalone SVG document.
pub fn chart_svg(chart: &BarChart) -> String {
    let (width, height) = figure_size_pt(chart.mode);
    let fonts = font_sizes(chart.mode);

    let plot_left = width * SUBPLOT_LEFT;
    let plot_right = width * SUBPLOT_RIGHT;
    let plot_top = height * (1.0 - SUBPLOT_TOP);
    let plot_bottom = height * (1.0 - SUBPLOT_BOTTOM);
    let plot_w = plot_right - plot_left;
    let plot_h = plot_bottom - plot_top;

    let px = |x: f64| plot_left + chart.x_fraction(x) as f32 * plot_w;
    let py = |y: f64| plot_bottom - chart.y_fraction(y) as f32 * plot_h;

    let ink = INK.hex();
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width:.2}' height='{height:.2}' viewBox='0 0 {width:.2} {height:.2}'>"
    );
    let _ = writeln!(
        svg,
        "  <rect width='{width:.2}' height='{height:.2}' fill='{}'/>",
        BACKGROUND.hex()
    );

    // Bars
    for bar in &chart.bars {
        let x = px(bar.left());
        let w = px(bar.right()) - x;
        let top = py(bar.height.max(0.0));
        let _ = writeln!(
            svg,
            "  <rect x='{x:.2}' y='{top:.2}' width='{w:.2}' height='{:.2}' fill='{}'/>",
            (plot_bottom - top).max(0.0),
            bar.color.hex()
        );
    }

    // Value annotations
    for note in &chart.annotations {
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.2}' fill='{ink}' font-family='{FONT_FAMILY}' font-size='{}' text-anchor='middle'>{}</text>",
            px(note.x),
            py(note.y),
            fonts.annotation,
            escape_text(&note.text)
        );
    }

    // Spines
    let _ = writeln!(
        svg,
        "  <path d='M{plot_left:.2} {plot_top:.2} V{plot_bottom:.2} H{plot_right:.2}' stroke='{ink}' stroke-width='0.8' fill='none'/>"
    );

    // Y ticks
    let step = chart.tick_step();
    for &tick in &chart.y_ticks {
        let y = py(tick);
        let _ = writeln!(
            svg,
            "  <line x1='{:.2}' y1='{y:.2}' x2='{plot_left:.2}' y2='{y:.2}' stroke='{ink}' stroke-width='0.8'/>",
            plot_left - TICK_LENGTH
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.2}' fill='{ink}' font-family='{FONT_FAMILY}' font-size='{}' text-anchor='end'>{}</text>",
            plot_left - TICK_LENGTH - 2.0,
            y + fonts.tick * 0.35,
            fonts.tick,
            escape_text(&format_tick(tick, step))
        );
    }

    // Category ticks and rotated labels
    for bar in &chart.bars {
        let x = px(bar.center);
        let _ = writeln!(
            svg,
            "  <line x1='{x:.2}' y1='{plot_bottom:.2}' x2='{x:.2}' y2='{:.2}' stroke='{ink}' stroke-width='0.8'/>",
            plot_bottom + TICK_LENGTH
        );
        let label_y = plot_bottom + TICK_LENGTH + fonts.tick + 2.0;
        let _ = writeln!(
            svg,
            "  <text x='{x:.2}' y='{label_y:.2}' fill='{ink}' font-family='{FONT_FAMILY}' font-size='{}' text-anchor='end' transform='rotate(-{CATEGORY_ROTATION_DEG} {x:.2} {label_y:.2})'>{}</text>",
            fonts.tick,
            escape_text(&bar.category)
        );
    }

    // Y-axis label
    let label_x = plot_left * 0.3;
    let label_y = plot_top + plot_h / 2.0;
    let _ = writeln!(
        svg,
        "  <text x='{label_x:.2}' y='{label_y:.2}' fill='{}' font-family='{FONT_FAMILY}' font-size='{}' text-anchor='middle' transform='rotate(-90 {label_x:.2} {label_y:.2})'>{}</text>",
        HEADING.hex(),
        fonts.axis_label,
        escape_text(&chart.y_label)
    );

    // Title
    let _ = writeln!(
        svg,
        "  <text x='{:.2}' y='{:.2}' fill='{}' font-family='{FONT_FAMILY}' font-size='{}' font-weight='bold' text-anchor='middle'>{}</text>",
        plot_left + plot_w / 2.0,
        plot_top - fonts.title * 0.6,
        HEADING.hex(),
        fonts.title,
        escape_text(&chart.title)
    );

    let _ = writeln!(svg, "</svg>");
    svg
}
